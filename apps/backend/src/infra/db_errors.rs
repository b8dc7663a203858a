//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return raw `sea_orm::DbErr`; repos convert here so that services
//! only ever see `DomainError`. Unique-constraint violations are sniffed out
//! of the driver message and mapped to specific conflict kinds; that is how
//! the (league, session_number) creation race surfaces to callers.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Map a unique-violation message to a domain conflict.
///
/// Postgres reports the constraint name; SQLite reports `table.column`.
/// Both spellings are matched so tests can run against either backend.
fn map_unique_violation(error_msg: &str) -> (ConflictKind, &'static str) {
    if error_msg.contains("ux_league_sessions_league_session")
        || error_msg.contains("league_sessions.session_number")
    {
        return (
            ConflictKind::SessionNumber,
            "Session number already created for this league",
        );
    }
    if error_msg.contains("ux_table_scores_table_wind")
        || error_msg.contains("ux_table_scores_table_player")
        || error_msg.contains("table_scores.wind")
        || error_msg.contains("table_scores.player_id")
    {
        return (ConflictKind::SeatTaken, "Seat already taken at this table");
    }
    if error_msg.contains("ux_league_members_league_user")
        || error_msg.contains("league_members.user_id")
    {
        return (
            ConflictKind::UniqueMember,
            "User is already a member of this league",
        );
    }
    if error_msg.contains("idx_users_email_unique") || error_msg.contains("users.email") {
        return (ConflictKind::UniqueEmail, "Email already registered");
    }
    (
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %error_msg, "Unique constraint violation");
        let (kind, detail) = map_unique_violation(&error_msg);
        return DomainError::conflict(kind, detail);
    }

    if mentions_sqlstate(&error_msg, "23503") {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_on_session_number_is_a_session_conflict() {
        let err = sea_orm::DbErr::Custom(
            "error returned from database: duplicate key value violates unique constraint \
             \"ux_league_sessions_league_session\""
                .into(),
        );
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Conflict(ConflictKind::SessionNumber, _)
        ));
    }

    #[test]
    fn sqlite_unique_violation_spelling_is_recognized() {
        let err = sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: league_sessions.league_id, league_sessions.session_number"
                .into(),
        );
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Conflict(ConflictKind::SessionNumber, _)
        ));
    }

    #[test]
    fn seat_uniques_map_to_seat_taken() {
        let err =
            sea_orm::DbErr::Custom("SQLSTATE(23505) ux_table_scores_table_wind violated".into());
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Conflict(ConflictKind::SeatTaken, _)
        ));
    }

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = sea_orm::DbErr::RecordNotFound("table_scores".into());
        let mapped = map_db_err(err);
        assert!(matches!(mapped, DomainError::NotFound(_, _)));
    }

    #[test]
    fn unknown_errors_stay_opaque_infra() {
        let err = sea_orm::DbErr::Custom("something exploded".into());
        let mapped = map_db_err(err);
        assert!(matches!(mapped, DomainError::Infra(_, _)));
    }
}
