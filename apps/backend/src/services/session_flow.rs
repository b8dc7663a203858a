//! Session orchestration - bridges the pure matchers with persistence.
//!
//! Session creation runs inside the caller's transaction: every precondition
//! failure aborts before any write, and the unique (league, session_number)
//! index turns a concurrent-creation race into a conflict for the loser.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info};

use crate::domain::matching::{self, PreviousSeat, PreviousTable, TablePlan};
use crate::domain::shuffle::{SeededShuffler, Shuffler};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::sessions::SessionWithTables;
use crate::repos::{leagues, memberships, players, sessions};

/// Session flow service.
#[derive(Default)]
pub struct SessionFlowService;

impl SessionFlowService {
    pub fn new() -> Self {
        Self
    }

    /// Create the league's next session with entropy-seeded shuffling.
    pub async fn create_session(
        &self,
        txn: &DatabaseTransaction,
        league_id: i64,
        actor_user_id: i64,
    ) -> Result<SessionWithTables, DomainError> {
        let mut shuffler = SeededShuffler::from_entropy();
        self.create_session_with(txn, league_id, actor_user_id, &mut shuffler)
            .await
    }

    /// Create the league's next session using the supplied shuffler.
    ///
    /// Session 1 random-seats the full 16-player roster; session N>1 demands
    /// a fully scored session N-1 and applies promotion/relegation.
    pub async fn create_session_with<S: Shuffler>(
        &self,
        txn: &DatabaseTransaction,
        league_id: i64,
        actor_user_id: i64,
        shuffler: &mut S,
    ) -> Result<SessionWithTables, DomainError> {
        info!(league_id, "Creating session");

        leagues::require_league(txn, league_id).await?;
        if !memberships::is_league_admin(txn, league_id, actor_user_id).await? {
            return Err(DomainError::forbidden(
                "Only league admins can create sessions",
            ));
        }

        let session_number = sessions::latest_session_number(txn, league_id)
            .await?
            .map_or(1, |latest| latest + 1);

        let plans: [TablePlan; matching::TABLES_PER_SESSION] = if session_number == 1 {
            let roster = players::find_all_by_league(txn, league_id).await?;
            let player_ids: Vec<i64> = roster.iter().map(|p| p.id).collect();
            matching::match_first_session(&player_ids, shuffler)?
        } else {
            let previous = sessions::find_with_tables(txn, league_id, session_number - 1)
                .await?
                .ok_or_else(|| {
                    DomainError::not_found(
                        NotFoundKind::Session,
                        format!(
                            "Session {} not found for league {league_id}",
                            session_number - 1
                        ),
                    )
                })?;
            matching::match_next_session(&to_previous_tables(&previous), shuffler)?
        };

        let created = sessions::create_session(txn, league_id, session_number, &plans).await?;

        info!(
            league_id,
            session_number,
            session_id = created.session.id,
            "Session created"
        );
        debug!(league_id, session_number, "Tables and seats persisted");

        Ok(created)
    }

    /// All sessions of a league, newest first. Any member may read.
    pub async fn list_sessions<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        league_id: i64,
        actor_user_id: i64,
    ) -> Result<Vec<SessionWithTables>, DomainError> {
        leagues::require_league(conn, league_id).await?;
        if memberships::find_membership(conn, league_id, actor_user_id)
            .await?
            .is_none()
        {
            return Err(DomainError::forbidden(
                "Only league members can view sessions",
            ));
        }

        sessions::find_all_with_tables(conn, league_id).await
    }
}

fn to_previous_tables(previous: &SessionWithTables) -> Vec<PreviousTable> {
    previous
        .tables
        .iter()
        .map(|t| PreviousTable {
            seats: t
                .scores
                .iter()
                .map(|s| PreviousSeat {
                    player_id: s.player_id,
                    rank: s.rank,
                })
                .collect(),
        })
        .collect()
}
