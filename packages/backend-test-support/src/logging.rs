//! Test logging shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_TEST_FILTER: &str = "warn";

/// Filter directive in order of precedence: `TEST_LOG`, `RUST_LOG`, `"warn"`.
pub fn filter_directive() -> String {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_TEST_FILTER.to_string())
}

/// Install a test-captured subscriber once per process.
///
/// Idempotent; if another subscriber is already installed it is left alone.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(EnvFilter::new(filter_directive()))
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
