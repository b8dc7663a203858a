use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "table_type")]
pub enum TableKind {
    #[sea_orm(string_value = "FIRST")]
    First,
    #[sea_orm(string_value = "UPPER")]
    Upper,
    #[sea_orm(string_value = "LOWER")]
    Lower,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "session_tables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "session_id")]
    pub session_id: i64,
    /// 1-based table number, unique within the session.
    #[sea_orm(column_name = "table_number", column_type = "SmallInteger")]
    pub table_number: i16,
    #[sea_orm(column_name = "table_type")]
    pub table_type: TableKind,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league_sessions::Entity",
        from = "Column::SessionId",
        to = "super::league_sessions::Column::Id"
    )]
    Session,
    #[sea_orm(has_many = "super::table_scores::Entity")]
    Scores,
}

impl Related<super::league_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::table_scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
