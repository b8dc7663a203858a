use sea_orm::Statement;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Leagues {
    Table,
    Id,
    Name,
    Description,
    Status,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    LeagueId,
    Name,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum LeagueMembers {
    Table,
    Id,
    LeagueId,
    UserId,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum LeagueSessions {
    Table,
    Id,
    LeagueId,
    SessionNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SessionTables {
    Table,
    Id,
    SessionId,
    TableNumber,
    TableType,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TableScores {
    Table,
    Id,
    TableId,
    PlayerId,
    Wind,
    FinalScore,
    ScorePtTenths,
    Rank,
    RankPt,
    TotalPtTenths,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum LeagueStatusEnum {
    #[iden = "league_status"]
    Type,
}

#[derive(Iden)]
enum MemberRoleEnum {
    #[iden = "member_role"]
    Type,
}

#[derive(Iden)]
enum TableTypeEnum {
    #[iden = "table_type"]
    Type,
}

#[derive(Iden)]
enum SeatWindEnum {
    #[iden = "seat_wind"]
    Type,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Postgres enums (PostgreSQL only; SQLite stores them as TEXT)
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                async fn enum_exists(
                    manager: &SchemaManager<'_>,
                    enum_name: &str,
                ) -> Result<bool, DbErr> {
                    let result = manager
                        .get_connection()
                        .query_one(Statement::from_string(
                            sea_orm::DatabaseBackend::Postgres,
                            format!("SELECT 1 FROM pg_type WHERE typname = '{}'", enum_name),
                        ))
                        .await?;
                    Ok(result.is_some())
                }

                if !enum_exists(manager, "league_status").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(LeagueStatusEnum::Type)
                                .values(["ACTIVE", "COMPLETED", "DELETED"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "member_role").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(MemberRoleEnum::Type)
                                .values(["ADMIN", "SCORER", "VIEWER"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "table_type").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(TableTypeEnum::Type)
                                .values(["FIRST", "UPPER", "LOWER"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "seat_wind").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(SeatWindEnum::Type)
                                .values(["EAST", "SOUTH", "WEST", "NORTH"])
                                .to_owned(),
                        )
                        .await?;
                }
            }
            sea_orm::DatabaseBackend::Sqlite => {
                // SQLite doesn't need enum types - they're stored as TEXT
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email_unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // leagues
        manager
            .create_table(
                Table::create()
                    .table(Leagues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Leagues::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Leagues::Name).string().not_null())
                    .col(ColumnDef::new(Leagues::Description).text().null())
                    .col(
                        ColumnDef::new(Leagues::Status)
                            .custom(LeagueStatusEnum::Type)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(ColumnDef::new(Leagues::CreatedBy).big_integer().not_null())
                    .col(
                        ColumnDef::new(Leagues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Leagues::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leagues_created_by")
                            .from(Leagues::Table, Leagues::CreatedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::LeagueId).big_integer().not_null())
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(ColumnDef::new(Players::UserId).big_integer().null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_league_id")
                            .from(Players::Table, Players::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_user_id")
                            .from(Players::Table, Players::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_players_league_id")
                    .table(Players::Table)
                    .col(Players::LeagueId)
                    .to_owned(),
            )
            .await?;

        // league_members
        manager
            .create_table(
                Table::create()
                    .table(LeagueMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeagueMembers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(LeagueMembers::LeagueId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeagueMembers::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeagueMembers::Role)
                            .custom(MemberRoleEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeagueMembers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeagueMembers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_members_league_id")
                            .from(LeagueMembers::Table, LeagueMembers::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_members_user_id")
                            .from(LeagueMembers::Table, LeagueMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_league_members_league_user")
                    .table(LeagueMembers::Table)
                    .col(LeagueMembers::LeagueId)
                    .col(LeagueMembers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // league_sessions
        manager
            .create_table(
                Table::create()
                    .table(LeagueSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeagueSessions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(LeagueSessions::LeagueId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeagueSessions::SessionNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeagueSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeagueSessions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_sessions_league_id")
                            .from(LeagueSessions::Table, LeagueSessions::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Concurrency guard: two creations of the same session number race
        // into this index and the loser gets a unique violation.
        manager
            .create_index(
                Index::create()
                    .name("ux_league_sessions_league_session")
                    .table(LeagueSessions::Table)
                    .col(LeagueSessions::LeagueId)
                    .col(LeagueSessions::SessionNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // session_tables
        manager
            .create_table(
                Table::create()
                    .table(SessionTables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionTables::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(SessionTables::SessionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionTables::TableNumber)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionTables::TableType)
                            .custom(TableTypeEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionTables::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionTables::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_tables_session_id")
                            .from(SessionTables::Table, SessionTables::SessionId)
                            .to(LeagueSessions::Table, LeagueSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_session_tables_session_number")
                    .table(SessionTables::Table)
                    .col(SessionTables::SessionId)
                    .col(SessionTables::TableNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // table_scores
        manager
            .create_table(
                Table::create()
                    .table(TableScores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TableScores::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(TableScores::TableId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TableScores::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TableScores::Wind)
                            .custom(SeatWindEnum::Type)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TableScores::FinalScore).integer().null())
                    .col(
                        ColumnDef::new(TableScores::ScorePtTenths)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(TableScores::Rank).small_integer().null())
                    .col(ColumnDef::new(TableScores::RankPt).integer().null())
                    .col(
                        ColumnDef::new(TableScores::TotalPtTenths)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TableScores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TableScores::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_table_scores_table_id")
                            .from(TableScores::Table, TableScores::TableId)
                            .to(SessionTables::Table, SessionTables::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_table_scores_player_id")
                            .from(TableScores::Table, TableScores::PlayerId)
                            .to(Players::Table, Players::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_table_scores_table_player")
                    .table(TableScores::Table)
                    .col(TableScores::TableId)
                    .col(TableScores::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_table_scores_table_wind")
                    .table(TableScores::Table)
                    .col(TableScores::TableId)
                    .col(TableScores::Wind)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order
        manager
            .drop_table(Table::drop().table(TableScores::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(SessionTables::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(LeagueSessions::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(LeagueMembers::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Leagues::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;

        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .drop_type(PgType::drop().if_exists().name(SeatWindEnum::Type).to_owned())
                .await?;
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(TableTypeEnum::Type)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(MemberRoleEnum::Type)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(LeagueStatusEnum::Type)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
