//! SeaORM adapter for league sessions.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{league_sessions, session_tables, table_scores};

pub mod dto;

pub use dto::{SeatCreate, SessionCreate, TableCreate};

/// Highest session number created for a league, if any.
pub async fn latest_session_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Option<i32>, sea_orm::DbErr> {
    let latest = league_sessions::Entity::find()
        .filter(league_sessions::Column::LeagueId.eq(league_id))
        .order_by_desc(league_sessions::Column::SessionNumber)
        .one(conn)
        .await?;
    Ok(latest.map(|s| s.session_number))
}

/// Find a session by its ID
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Option<league_sessions::Model>, sea_orm::DbErr> {
    league_sessions::Entity::find_by_id(session_id).one(conn).await
}

/// Find a session by league and session number
pub async fn find_by_league_and_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
    session_number: i32,
) -> Result<Option<league_sessions::Model>, sea_orm::DbErr> {
    league_sessions::Entity::find()
        .filter(league_sessions::Column::LeagueId.eq(league_id))
        .filter(league_sessions::Column::SessionNumber.eq(session_number))
        .one(conn)
        .await
}

/// All sessions of a league, newest first
pub async fn find_all_by_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: i64,
) -> Result<Vec<league_sessions::Model>, sea_orm::DbErr> {
    league_sessions::Entity::find()
        .filter(league_sessions::Column::LeagueId.eq(league_id))
        .order_by_desc(league_sessions::Column::SessionNumber)
        .all(conn)
        .await
}

/// Tables of a session, ordered by table number
pub async fn find_tables_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Vec<session_tables::Model>, sea_orm::DbErr> {
    session_tables::Entity::find()
        .filter(session_tables::Column::SessionId.eq(session_id))
        .order_by_asc(session_tables::Column::TableNumber)
        .all(conn)
        .await
}

/// Create a session with its tables and (unscored) seats.
///
/// Runs inside the caller's transaction; the unique index on
/// (league_id, session_number) rejects concurrent duplicates.
pub async fn create_session_with_tables(
    txn: &DatabaseTransaction,
    dto: SessionCreate,
) -> Result<
    (
        league_sessions::Model,
        Vec<(session_tables::Model, Vec<table_scores::Model>)>,
    ),
    sea_orm::DbErr,
> {
    let now = time::OffsetDateTime::now_utc();

    let session = league_sessions::ActiveModel {
        id: sea_orm::NotSet,
        league_id: Set(dto.league_id),
        session_number: Set(dto.session_number),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await?;

    let mut tables = Vec::with_capacity(dto.tables.len());
    for table_dto in dto.tables {
        let table = session_tables::ActiveModel {
            id: sea_orm::NotSet,
            session_id: Set(session.id),
            table_number: Set(table_dto.table_number),
            table_type: Set(table_dto.table_type),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await?;

        let mut seats = Vec::with_capacity(table_dto.seats.len());
        for seat_dto in table_dto.seats {
            let seat = table_scores::ActiveModel {
                id: sea_orm::NotSet,
                table_id: Set(table.id),
                player_id: Set(seat_dto.player_id),
                wind: Set(seat_dto.wind),
                final_score: Set(None),
                score_pt_tenths: Set(None),
                rank: Set(None),
                rank_pt: Set(None),
                total_pt_tenths: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(txn)
            .await?;
            seats.push(seat);
        }

        tables.push((table, seats));
    }

    Ok((session, tables))
}
