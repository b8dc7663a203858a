//! SeaORM adapters: raw queries against the entities, one module per
//! aggregate. Adapters return `sea_orm::DbErr`; translation to `DomainError`
//! happens in the repos via `infra::db_errors`.

pub mod leagues_sea;
pub mod memberships_sea;
pub mod players_sea;
pub mod scores_sea;
pub mod sessions_sea;
