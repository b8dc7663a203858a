//! SeaORM adapter for table scores.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{session_tables, table_scores};

pub mod dto;

pub use dto::ScoreUpdate;

/// Find a table by ID
pub async fn find_table_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    table_id: i64,
) -> Result<Option<session_tables::Model>, sea_orm::DbErr> {
    session_tables::Entity::find_by_id(table_id).one(conn).await
}

/// All seats of a table, in insertion (seating) order
pub async fn find_scores_by_table<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    table_id: i64,
) -> Result<Vec<table_scores::Model>, sea_orm::DbErr> {
    table_scores::Entity::find()
        .filter(table_scores::Column::TableId.eq(table_id))
        .order_by_asc(table_scores::Column::Id)
        .all(conn)
        .await
}

/// Overwrite the score fields of the given seats.
///
/// Every update is a full replacement of the derived fields; partial rows are
/// never written. Runs inside the caller's transaction so either all four
/// seats change or none do.
pub async fn update_scores(
    txn: &DatabaseTransaction,
    updates: &[ScoreUpdate],
) -> Result<(), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    for update in updates {
        let seat = table_scores::Entity::find_by_id(update.score_id)
            .one(txn)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("table_scores {}", update.score_id))
            })?;

        let mut seat: table_scores::ActiveModel = seat.into();
        seat.final_score = Set(Some(update.final_score));
        seat.score_pt_tenths = Set(Some(update.score_pt_tenths));
        seat.rank = Set(Some(update.rank));
        seat.rank_pt = Set(Some(update.rank_pt));
        seat.total_pt_tenths = Set(Some(update.total_pt_tenths));
        seat.updated_at = Set(now);
        seat.update(txn).await?;
    }

    Ok(())
}
