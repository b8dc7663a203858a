use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "league_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "league_id")]
    pub league_id: i64,
    /// Sequential 1-based session number, unique within the league.
    #[sea_orm(column_name = "session_number")]
    pub session_number: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::leagues::Entity",
        from = "Column::LeagueId",
        to = "super::leagues::Column::Id"
    )]
    League,
    #[sea_orm(has_many = "super::session_tables::Entity")]
    Tables,
}

impl Related<super::leagues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl Related<super::session_tables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tables.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
