//! DTOs for sessions_sea adapter.

use crate::entities::session_tables::TableKind;
use crate::entities::table_scores::SeatWind;

/// One seat to create, scores NULL.
#[derive(Debug, Clone)]
pub struct SeatCreate {
    pub player_id: i64,
    pub wind: SeatWind,
}

/// One table to create with its four seats.
#[derive(Debug, Clone)]
pub struct TableCreate {
    pub table_number: i16,
    pub table_type: TableKind,
    pub seats: Vec<SeatCreate>,
}

/// DTO for creating a session together with its tables and seats.
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub league_id: i64,
    pub session_number: i32,
    pub tables: Vec<TableCreate>,
}
