//! Score repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::scores_sea as scores_adapter;
use crate::domain::scoring::{Pt, SeatScore};
use crate::domain::Wind;
use crate::entities::table_scores::{self, SeatWind};
use crate::errors::domain::DomainError;
use crate::repos::sessions::SessionTable;

/// Seat row domain model. Score fields are None until the table is scored.
#[derive(Debug, Clone, PartialEq)]
pub struct TableScore {
    pub id: i64,
    pub table_id: i64,
    pub player_id: i64,
    pub wind: Wind,
    pub final_score: Option<i32>,
    pub score_pt: Option<Pt>,
    pub rank: Option<u8>,
    pub rank_pt: Option<i32>,
    pub total_pt: Option<Pt>,
}

impl TableScore {
    /// A seat counts as scored once it has a rank.
    pub fn is_scored(&self) -> bool {
        self.rank.is_some()
    }
}

// Free functions (generic) for score operations

/// Find a table by ID
pub async fn find_table<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    table_id: i64,
) -> Result<Option<SessionTable>, DomainError> {
    let table = scores_adapter::find_table_by_id(conn, table_id).await?;
    Ok(table.map(SessionTable::from))
}

/// All seats of a table
pub async fn find_scores_by_table<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    table_id: i64,
) -> Result<Vec<TableScore>, DomainError> {
    let scores = scores_adapter::find_scores_by_table(conn, table_id).await?;
    Ok(scores.into_iter().map(TableScore::from).collect())
}

/// Persist a complete engine result set for one table
pub async fn apply_seat_scores(
    txn: &DatabaseTransaction,
    results: &[SeatScore],
) -> Result<(), DomainError> {
    let updates: Vec<scores_adapter::ScoreUpdate> = results
        .iter()
        .map(|r| scores_adapter::ScoreUpdate {
            score_id: r.score_id,
            final_score: r.final_score,
            score_pt_tenths: r.score_pt.tenths(),
            rank: i16::from(r.rank),
            rank_pt: r.rank_pt,
            total_pt_tenths: r.total_pt.tenths(),
        })
        .collect();

    scores_adapter::update_scores(txn, &updates).await?;
    Ok(())
}

// Conversions between SeaORM models and domain models

impl From<table_scores::Model> for TableScore {
    fn from(model: table_scores::Model) -> Self {
        Self {
            id: model.id,
            table_id: model.table_id,
            player_id: model.player_id,
            wind: model.wind.into(),
            final_score: model.final_score,
            score_pt: model.score_pt_tenths.map(Pt::from_tenths),
            rank: model.rank.map(|r| r as u8),
            rank_pt: model.rank_pt,
            total_pt: model.total_pt_tenths.map(Pt::from_tenths),
        }
    }
}

impl From<SeatWind> for Wind {
    fn from(wind: SeatWind) -> Self {
        match wind {
            SeatWind::East => Wind::East,
            SeatWind::South => Wind::South,
            SeatWind::West => Wind::West,
            SeatWind::North => Wind::North,
        }
    }
}

impl From<Wind> for SeatWind {
    fn from(wind: Wind) -> Self {
        match wind {
            Wind::East => SeatWind::East,
            Wind::South => SeatWind::South,
            Wind::West => SeatWind::West,
            Wind::North => SeatWind::North,
        }
    }
}
