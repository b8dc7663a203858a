//! Session repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::sessions_sea as sessions_adapter;
use crate::domain::matching::TablePlan;
use crate::domain::TableType;
use crate::entities::league_sessions;
use crate::entities::session_tables::{self, TableKind};
use crate::errors::domain::DomainError;
use crate::repos::scores::TableScore;

/// Session domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i64,
    pub league_id: i64,
    pub session_number: i32,
    pub created_at: time::OffsetDateTime,
}

/// Table domain model
#[derive(Debug, Clone, PartialEq)]
pub struct SessionTable {
    pub id: i64,
    pub session_id: i64,
    pub table_number: u8,
    pub table_type: TableType,
}

/// A table together with its seat rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TableWithScores {
    pub table: SessionTable,
    pub scores: Vec<TableScore>,
}

/// A session with all tables and seats loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionWithTables {
    pub session: Session,
    pub tables: Vec<TableWithScores>,
}

// Free functions (generic) for session operations

/// Highest session number for a league, None before the first session
pub async fn latest_session_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<i32>, DomainError> {
    Ok(sessions_adapter::latest_session_number(conn, league_id).await?)
}

/// Find a session by its ID
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Option<Session>, DomainError> {
    let session = sessions_adapter::find_by_id(conn, session_id).await?;
    Ok(session.map(Session::from))
}

/// Load one session with its tables and seats
pub async fn find_with_tables<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    session_number: i32,
) -> Result<Option<SessionWithTables>, DomainError> {
    let Some(session) =
        sessions_adapter::find_by_league_and_number(conn, league_id, session_number).await?
    else {
        return Ok(None);
    };
    Ok(Some(load_tables(conn, session).await?))
}

/// Load all sessions of a league, newest first, tables and seats included
pub async fn find_all_with_tables<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Vec<SessionWithTables>, DomainError> {
    let sessions = sessions_adapter::find_all_by_league(conn, league_id).await?;
    let mut out = Vec::with_capacity(sessions.len());
    for session in sessions {
        out.push(load_tables(conn, session).await?);
    }
    Ok(out)
}

async fn load_tables<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session: league_sessions::Model,
) -> Result<SessionWithTables, DomainError> {
    let tables = sessions_adapter::find_tables_by_session(conn, session.id).await?;
    let mut with_scores = Vec::with_capacity(tables.len());
    for table in tables {
        let scores = crate::adapters::scores_sea::find_scores_by_table(conn, table.id).await?;
        with_scores.push(TableWithScores {
            table: SessionTable::from(table),
            scores: scores.into_iter().map(TableScore::from).collect(),
        });
    }
    Ok(SessionWithTables {
        session: Session::from(session),
        tables: with_scores,
    })
}

/// Persist a matching plan as a new session with tables and unscored seats
pub async fn create_session(
    txn: &DatabaseTransaction,
    league_id: i64,
    session_number: i32,
    plans: &[TablePlan],
) -> Result<SessionWithTables, DomainError> {
    let dto = sessions_adapter::SessionCreate {
        league_id,
        session_number,
        tables: plans
            .iter()
            .map(|plan| sessions_adapter::TableCreate {
                table_number: i16::from(plan.table_number),
                table_type: plan.table_type.into(),
                seats: plan
                    .seats
                    .iter()
                    .map(|seat| sessions_adapter::SeatCreate {
                        player_id: seat.player_id,
                        wind: seat.wind.into(),
                    })
                    .collect(),
            })
            .collect(),
    };

    let (session, tables) = sessions_adapter::create_session_with_tables(txn, dto).await?;
    Ok(SessionWithTables {
        session: Session::from(session),
        tables: tables
            .into_iter()
            .map(|(table, scores)| TableWithScores {
                table: SessionTable::from(table),
                scores: scores.into_iter().map(TableScore::from).collect(),
            })
            .collect(),
    })
}

// Conversions between SeaORM models and domain models

impl From<league_sessions::Model> for Session {
    fn from(model: league_sessions::Model) -> Self {
        Self {
            id: model.id,
            league_id: model.league_id,
            session_number: model.session_number,
            created_at: model.created_at,
        }
    }
}

impl From<session_tables::Model> for SessionTable {
    fn from(model: session_tables::Model) -> Self {
        Self {
            id: model.id,
            session_id: model.session_id,
            table_number: model.table_number as u8,
            table_type: model.table_type.into(),
        }
    }
}

impl From<TableKind> for TableType {
    fn from(kind: TableKind) -> Self {
        match kind {
            TableKind::First => TableType::First,
            TableKind::Upper => TableType::Upper,
            TableKind::Lower => TableType::Lower,
        }
    }
}

impl From<TableType> for TableKind {
    fn from(table_type: TableType) -> Self {
        match table_type {
            TableType::First => TableKind::First,
            TableType::Upper => TableKind::Upper,
            TableType::Lower => TableKind::Lower,
        }
    }
}
