//! Domain-level error type used across services, repos and adapters.
//!
//! This error type is transport- and DB-agnostic. Business-rule failures are
//! surfaced directly with a kind plus a human-readable detail; the core never
//! retries on its own.

use thiserror::Error;

/// Validation kinds for business-rule violations
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// First session requested with anything but 16 distinct players
    PlayerCount,
    /// Follow-up session requested before the previous one is fully ranked
    IncompleteScores,
    /// Score submission with a number of entries other than 4
    EntryCount,
    /// Score submission naming the same seat twice
    DuplicateScoreId,
    /// A final score outside the sane [0, 200000] bound
    ScoreOutOfRange,
    /// Four final scores that do not sum to 100000
    ScoreSum,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    User,
    League,
    Player,
    Session,
    Table,
    Score,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Concurrent session creation lost the (league, session_number) race
    SessionNumber,
    /// A seat at a table is already taken (player or wind duplicated)
    SeatTaken,
    UniqueEmail,
    /// A user is already a member of the league
    UniqueMember,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    /// Persisted data violates a structural invariant the schema should have
    /// upheld (e.g. a table without exactly four seats)
    DataCorruption,
    Config,
    Other(String),
}

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    #[error("validation {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Actor lacks the capability for the operation
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Human-readable detail, independent of kind.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d)
            | DomainError::Conflict(_, d)
            | DomainError::NotFound(_, d)
            | DomainError::Forbidden(d)
            | DomainError::Infra(_, d) => d,
        }
    }
}
