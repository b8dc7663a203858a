#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod errors;
pub mod infra;
pub mod logging;
pub mod repos;
pub mod services;

// Re-exports for public API
pub use config::db::{db_url, DbOwner, DbProfile};
pub use db::with_txn;
pub use errors::{DomainError, ErrorCode};
pub use infra::connect_db;
pub use logging::init_logging;
pub use services::{LeagueService, ScoreService, ScoreSubmission, SessionFlowService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
