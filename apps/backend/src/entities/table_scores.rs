use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "seat_wind")]
pub enum SeatWind {
    #[sea_orm(string_value = "EAST")]
    East,
    #[sea_orm(string_value = "SOUTH")]
    South,
    #[sea_orm(string_value = "WEST")]
    West,
    #[sea_orm(string_value = "NORTH")]
    North,
}

/// One seat at a table. Score fields stay NULL until the table is scored;
/// `score_pt_tenths` / `total_pt_tenths` carry one-decimal points as exact
/// integer tenths.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "table_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "table_id")]
    pub table_id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    pub wind: SeatWind,
    #[sea_orm(column_name = "final_score")]
    pub final_score: Option<i32>,
    #[sea_orm(column_name = "score_pt_tenths")]
    pub score_pt_tenths: Option<i32>,
    pub rank: Option<i16>,
    #[sea_orm(column_name = "rank_pt")]
    pub rank_pt: Option<i32>,
    #[sea_orm(column_name = "total_pt_tenths")]
    pub total_pt_tenths: Option<i32>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::session_tables::Entity",
        from = "Column::TableId",
        to = "super::session_tables::Column::Id"
    )]
    Table,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Player,
}

impl Related<super::session_tables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Table.def()
    }
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
