//! Logging for unit tests, installed by the `ctor` hook in `lib.rs`.
//!
//! Integration tests use `backend_test_support::logging` instead, which
//! reads the same variables.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// `TEST_LOG`, then `RUST_LOG`, then `"warn"`. Safe to call repeatedly.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
