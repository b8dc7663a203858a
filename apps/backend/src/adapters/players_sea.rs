//! SeaORM adapter for league rosters.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::players;

/// All roster entries of a league, in creation order
pub async fn find_all_by_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::LeagueId.eq(league_id))
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

/// Find a roster entry by ID
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}
