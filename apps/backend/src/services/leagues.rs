//! League lifecycle services.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::errors::domain::DomainError;
use crate::repos::leagues::{League, LeagueStatus};
use crate::repos::players::Player;
use crate::repos::{leagues, memberships, players};

/// Maximum length of league and player names.
const MAX_NAME_LEN: usize = 20;

/// League domain service.
#[derive(Default)]
pub struct LeagueService;

impl LeagueService {
    pub fn new() -> Self {
        Self
    }

    /// Create a league with its roster in one transaction. The creator
    /// becomes the first linked player and the league's admin.
    pub async fn create_league(
        &self,
        txn: &DatabaseTransaction,
        actor_user_id: i64,
        name: String,
        description: Option<String>,
        player_names: Vec<String>,
    ) -> Result<(League, Vec<Player>), DomainError> {
        validate_name("League name", &name)?;
        if player_names.is_empty() {
            return Err(DomainError::validation_other(
                "A league needs at least one roster entry",
            ));
        }
        for player_name in &player_names {
            validate_name("Player name", player_name)?;
        }

        let (league, roster) =
            leagues::create_league_with_players(txn, name, description, actor_user_id, player_names)
                .await?;

        info!(
            league_id = league.id,
            roster_size = roster.len(),
            "League created"
        );
        Ok((league, roster))
    }

    /// Load a league with its roster. Any member may read.
    pub async fn get_league<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        league_id: i64,
        actor_user_id: i64,
    ) -> Result<(League, Vec<Player>), DomainError> {
        let league = leagues::require_league(conn, league_id).await?;
        if memberships::find_membership(conn, league_id, actor_user_id)
            .await?
            .is_none()
        {
            return Err(DomainError::forbidden("Only league members can view a league"));
        }

        let roster = players::find_all_by_league(conn, league_id).await?;
        Ok((league, roster))
    }

    /// Mark a league completed. Admin only.
    pub async fn complete_league(
        &self,
        txn: &DatabaseTransaction,
        league_id: i64,
        actor_user_id: i64,
    ) -> Result<League, DomainError> {
        self.transition(txn, league_id, actor_user_id, LeagueStatus::Completed)
            .await
    }

    /// Soft-delete a league. Admin only.
    pub async fn delete_league(
        &self,
        txn: &DatabaseTransaction,
        league_id: i64,
        actor_user_id: i64,
    ) -> Result<League, DomainError> {
        self.transition(txn, league_id, actor_user_id, LeagueStatus::Deleted)
            .await
    }

    async fn transition(
        &self,
        txn: &DatabaseTransaction,
        league_id: i64,
        actor_user_id: i64,
        status: LeagueStatus,
    ) -> Result<League, DomainError> {
        leagues::require_league(txn, league_id).await?;
        if !memberships::is_league_admin(txn, league_id, actor_user_id).await? {
            return Err(DomainError::forbidden(
                "Only league admins can change league status",
            ));
        }

        let league = leagues::update_status(txn, league_id, status).await?;
        info!(league_id, status = ?status, "League status updated");
        Ok(league)
    }
}

fn validate_name(what: &str, name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::validation_other(format!(
            "{what} must be 1..={MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}
