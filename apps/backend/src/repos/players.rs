//! Player (roster) repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::DomainError;

/// Roster entry domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub league_id: i64,
    pub name: String,
    pub user_id: Option<i64>,
}

/// All roster entries of a league
pub async fn find_all_by_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::find_all_by_league(conn, league_id).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            league_id: model.league_id,
            name: model.name,
            user_id: model.user_id,
        }
    }
}
