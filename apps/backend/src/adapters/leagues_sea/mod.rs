//! SeaORM adapter for leagues.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    Set,
};

use crate::entities::league_members::MemberRole;
use crate::entities::{league_members, leagues, players};

pub mod dto;

pub use dto::{LeagueCreate, LeagueUpdateStatus};

/// Find a league by ID, excluding soft-deleted ones
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<leagues::Model>, sea_orm::DbErr> {
    leagues::Entity::find_by_id(league_id)
        .filter(leagues::Column::Status.ne(leagues::LeagueStatus::Deleted))
        .one(conn)
        .await
}

/// Create a league with its roster and the creator's admin membership.
///
/// The first roster entry is linked to the creator's account; the rest stay
/// unlinked until claimed.
pub async fn create_league_with_players(
    txn: &DatabaseTransaction,
    dto: LeagueCreate,
) -> Result<(leagues::Model, Vec<players::Model>), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let league = leagues::ActiveModel {
        id: sea_orm::NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
        status: Set(leagues::LeagueStatus::Active),
        created_by: Set(dto.created_by),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await?;

    let mut roster = Vec::with_capacity(dto.player_names.len());
    for (index, name) in dto.player_names.into_iter().enumerate() {
        let player = players::ActiveModel {
            id: sea_orm::NotSet,
            league_id: Set(league.id),
            name: Set(name),
            user_id: Set((index == 0).then_some(dto.created_by)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await?;
        roster.push(player);
    }

    league_members::ActiveModel {
        id: sea_orm::NotSet,
        league_id: Set(league.id),
        user_id: Set(dto.created_by),
        role: Set(MemberRole::Admin),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await?;

    Ok((league, roster))
}

/// Update a league's status (soft delete included)
pub async fn update_status(
    txn: &DatabaseTransaction,
    dto: LeagueUpdateStatus,
) -> Result<leagues::Model, sea_orm::DbErr> {
    let league = leagues::Entity::find_by_id(dto.league_id)
        .one(txn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("leagues {}", dto.league_id)))?;

    let mut league: leagues::ActiveModel = league.into();
    league.status = Set(dto.status);
    league.updated_at = Set(time::OffsetDateTime::now_utc());
    league.update(txn).await
}
