//! League repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::leagues_sea as leagues_adapter;
use crate::entities::leagues;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::players::Player;

/// League lifecycle status (domain type)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueStatus {
    Active,
    Completed,
    Deleted,
}

/// League domain model
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: LeagueStatus,
    pub created_by: i64,
    pub created_at: time::OffsetDateTime,
}

// Free functions (generic) for league operations

/// Find a league by ID (soft-deleted leagues excluded)
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<League>, DomainError> {
    let league = leagues_adapter::find_by_id(conn, league_id).await?;
    Ok(league.map(League::from))
}

/// Load a league or fail with NotFound
pub async fn require_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<League, DomainError> {
    find_by_id(conn, league_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::League, format!("League {league_id} not found"))
    })
}

/// Create a league with its roster; the creator becomes the first linked
/// player and the league's admin member
pub async fn create_league_with_players(
    txn: &DatabaseTransaction,
    name: String,
    description: Option<String>,
    created_by: i64,
    player_names: Vec<String>,
) -> Result<(League, Vec<Player>), DomainError> {
    let dto = leagues_adapter::LeagueCreate {
        name,
        description,
        created_by,
        player_names,
    };
    let (league, roster) = leagues_adapter::create_league_with_players(txn, dto).await?;
    Ok((
        League::from(league),
        roster.into_iter().map(Player::from).collect(),
    ))
}

/// Transition a league's status (soft delete included)
pub async fn update_status(
    txn: &DatabaseTransaction,
    league_id: i64,
    status: LeagueStatus,
) -> Result<League, DomainError> {
    let dto = leagues_adapter::LeagueUpdateStatus {
        league_id,
        status: status.into(),
    };
    let league = leagues_adapter::update_status(txn, dto).await?;
    Ok(League::from(league))
}

// Conversions between SeaORM models and domain models

impl From<leagues::Model> for League {
    fn from(model: leagues::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            status: model.status.into(),
            created_by: model.created_by,
            created_at: model.created_at,
        }
    }
}

impl From<leagues::LeagueStatus> for LeagueStatus {
    fn from(status: leagues::LeagueStatus) -> Self {
        match status {
            leagues::LeagueStatus::Active => LeagueStatus::Active,
            leagues::LeagueStatus::Completed => LeagueStatus::Completed,
            leagues::LeagueStatus::Deleted => LeagueStatus::Deleted,
        }
    }
}

impl From<LeagueStatus> for leagues::LeagueStatus {
    fn from(status: LeagueStatus) -> Self {
        match status {
            LeagueStatus::Active => leagues::LeagueStatus::Active,
            LeagueStatus::Completed => leagues::LeagueStatus::Completed,
            LeagueStatus::Deleted => leagues::LeagueStatus::Deleted,
        }
    }
}
