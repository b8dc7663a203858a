//! Score submission orchestration.
//!
//! The score engine is pure; this service loads the table context, runs the
//! engine and persists its complete replacement set inside the caller's
//! transaction, so the four seat updates land together or not at all.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::domain::scoring::{self, ScoreEntry};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::repos::{memberships, scores, sessions};

/// One seat's submitted final score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreSubmission {
    pub score_id: i64,
    pub final_score: i32,
}

/// Score domain service.
#[derive(Default)]
pub struct ScoreService;

impl ScoreService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and record the four final scores of one table.
    ///
    /// Re-submission recomputes and overwrites all derived fields.
    pub async fn submit_table_scores(
        &self,
        txn: &DatabaseTransaction,
        table_id: i64,
        actor_user_id: i64,
        entries: &[ScoreSubmission],
    ) -> Result<(), DomainError> {
        info!(table_id, "Submitting table scores");

        let table = scores::find_table(txn, table_id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Table, format!("Table {table_id} not found"))
        })?;

        // A table always hangs off a session; a dangling reference means the
        // store itself is broken.
        let session = sessions::find_by_id(txn, table.session_id)
            .await?
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("Table {table_id} references missing session"),
                )
            })?;

        if !memberships::can_enter_scores(txn, session.league_id, actor_user_id).await? {
            return Err(DomainError::forbidden(
                "Only league admins and scorers can enter scores",
            ));
        }

        let seats = scores::find_scores_by_table(txn, table_id).await?;
        if seats.len() != 4 {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Table {table_id} has {} seats, expected 4", seats.len()),
            ));
        }

        let engine_entries: Vec<ScoreEntry> = entries
            .iter()
            .map(|e| {
                let seat = seats.iter().find(|s| s.id == e.score_id).ok_or_else(|| {
                    DomainError::not_found(
                        NotFoundKind::Score,
                        format!("Score {} does not belong to table {table_id}", e.score_id),
                    )
                })?;
                Ok(ScoreEntry {
                    score_id: e.score_id,
                    wind: seat.wind,
                    final_score: e.final_score,
                })
            })
            .collect::<Result<_, DomainError>>()?;

        let results = scoring::score_table(table.table_type, &engine_entries)?;
        scores::apply_seat_scores(txn, &results).await?;

        info!(table_id, "Table scores recorded");
        Ok(())
    }
}
