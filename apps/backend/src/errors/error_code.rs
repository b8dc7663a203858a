//! Stable error codes for the league backend.
//!
//! This module defines all machine-readable error codes surfaced to callers.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear alongside the human-readable detail.

use core::fmt;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};

/// Centralized error codes for the league backend.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string so callers
/// can branch on codes without parsing detail text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authorization
    /// Access denied
    Forbidden,

    // Request validation
    /// First session requires exactly 16 distinct players
    PlayerCount,
    /// Previous session is not fully scored
    IncompleteScores,
    /// Score submission must carry exactly 4 entries
    EntryCount,
    /// Duplicate seat in a score submission
    DuplicateScoreId,
    /// Final score outside the allowed bound
    ScoreOutOfRange,
    /// Final scores must sum to the fixed table total
    ScoreSum,
    /// General validation error
    ValidationError,

    // Resource not found
    UserNotFound,
    LeagueNotFound,
    PlayerNotFound,
    SessionNotFound,
    TableNotFound,
    ScoreNotFound,
    /// General not found error
    NotFound,

    // Business logic conflicts
    /// Session number already created for this league
    SessionNumberConflict,
    /// Seat already taken at a table
    SeatTaken,
    /// Unique email constraint
    UniqueEmail,
    /// User already a member of the league
    UniqueMember,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System errors
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forbidden => "FORBIDDEN",
            Self::PlayerCount => "PLAYER_COUNT",
            Self::IncompleteScores => "INCOMPLETE_SCORES",
            Self::EntryCount => "ENTRY_COUNT",
            Self::DuplicateScoreId => "DUPLICATE_SCORE_ID",
            Self::ScoreOutOfRange => "SCORE_OUT_OF_RANGE",
            Self::ScoreSum => "SCORE_SUM",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::LeagueNotFound => "LEAGUE_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::TableNotFound => "TABLE_NOT_FOUND",
            Self::ScoreNotFound => "SCORE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::SessionNumberConflict => "SESSION_NUMBER_CONFLICT",
            Self::SeatTaken => "SEAT_TAKEN",
            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::UniqueMember => "UNIQUE_MEMBER",
            Self::Conflict => "CONFLICT",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::PlayerCount => Self::PlayerCount,
                ValidationKind::IncompleteScores => Self::IncompleteScores,
                ValidationKind::EntryCount => Self::EntryCount,
                ValidationKind::DuplicateScoreId => Self::DuplicateScoreId,
                ValidationKind::ScoreOutOfRange => Self::ScoreOutOfRange,
                ValidationKind::ScoreSum => Self::ScoreSum,
                _ => Self::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::SessionNumber => Self::SessionNumberConflict,
                ConflictKind::SeatTaken => Self::SeatTaken,
                ConflictKind::UniqueEmail => Self::UniqueEmail,
                ConflictKind::UniqueMember => Self::UniqueMember,
                _ => Self::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::User => Self::UserNotFound,
                NotFoundKind::League => Self::LeagueNotFound,
                NotFoundKind::Player => Self::PlayerNotFound,
                NotFoundKind::Session => Self::SessionNotFound,
                NotFoundKind::Table => Self::TableNotFound,
                NotFoundKind::Score => Self::ScoreNotFound,
                _ => Self::NotFound,
            },
            DomainError::Forbidden(_) => Self::Forbidden,
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::Timeout => Self::DbTimeout,
                InfraErrorKind::DbUnavailable => Self::DbUnavailable,
                InfraErrorKind::DataCorruption => Self::DataCorruption,
                InfraErrorKind::Config => Self::ConfigError,
                _ => Self::Internal,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_screaming_snake_case() {
        let codes = [
            ErrorCode::Forbidden,
            ErrorCode::PlayerCount,
            ErrorCode::IncompleteScores,
            ErrorCode::SessionNumberConflict,
            ErrorCode::DbUnavailable,
        ];
        for code in codes {
            let s = code.as_str();
            assert!(!s.is_empty());
            assert!(s
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_' || c.is_ascii_digit()));
        }
    }

    #[test]
    fn domain_errors_map_to_specific_codes() {
        let err = DomainError::validation(ValidationKind::PlayerCount, "need 16");
        assert_eq!(ErrorCode::from(&err), ErrorCode::PlayerCount);

        let err = DomainError::conflict(ConflictKind::SessionNumber, "race");
        assert_eq!(ErrorCode::from(&err), ErrorCode::SessionNumberConflict);

        let err = DomainError::not_found(NotFoundKind::Table, "gone");
        assert_eq!(ErrorCode::from(&err), ErrorCode::TableNotFound);

        let err = DomainError::forbidden("nope");
        assert_eq!(ErrorCode::from(&err), ErrorCode::Forbidden);

        let err = DomainError::infra(InfraErrorKind::DataCorruption, "bad pool");
        assert_eq!(ErrorCode::from(&err), ErrorCode::DataCorruption);
    }
}
