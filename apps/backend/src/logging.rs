//! Structured logging initialization for embedding applications.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize the global tracing subscriber.
///
/// Level is taken from `RUST_LOG`, defaulting to `info`. Idempotent and
/// race-safe; later calls are no-ops.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("RUST_LOG")
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .try_init()
            .ok(); // Never panic if something else already initialized
    });
}
