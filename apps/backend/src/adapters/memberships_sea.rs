//! SeaORM adapter for league memberships.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    Set,
};

use crate::entities::league_members::{self, MemberRole};

/// DTO for creating a membership.
#[derive(Debug, Clone)]
pub struct MembershipCreate {
    pub league_id: i64,
    pub user_id: i64,
    pub role: MemberRole,
}

/// Find a user's membership in a league
pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    user_id: i64,
) -> Result<Option<league_members::Model>, sea_orm::DbErr> {
    league_members::Entity::find()
        .filter(league_members::Column::LeagueId.eq(league_id))
        .filter(league_members::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Create a membership; the (league, user) unique index rejects duplicates
pub async fn create_membership(
    txn: &DatabaseTransaction,
    dto: MembershipCreate,
) -> Result<league_members::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    league_members::ActiveModel {
        id: sea_orm::NotSet,
        league_id: Set(dto.league_id),
        user_id: Set(dto.user_id),
        role: Set(dto.role),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await
}
