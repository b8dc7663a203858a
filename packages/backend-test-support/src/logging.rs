//! Unified test logging initialization shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests. Idempotent and race-safe.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, then a quiet `warn`
/// default. Output goes through the test writer so cargo and nextest can
/// capture it per test.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time() // Stable output across runs
            .try_init()
            .ok(); // Never panic if something else already initialized
    });
}
