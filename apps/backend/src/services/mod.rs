//! Service layer: orchestrates domain logic with repos inside the caller's
//! transaction. Services never commit; `db::with_txn` owns the lifecycle.

pub mod leagues;
pub mod scores;
pub mod session_flow;

pub use leagues::LeagueService;
pub use scores::{ScoreService, ScoreSubmission};
pub use session_flow::SessionFlowService;
