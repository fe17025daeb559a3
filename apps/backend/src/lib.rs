#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod test_support;
pub mod web;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::CatalogRepoSea;
pub use config::db::{db_url, DbKind, DbOwner, RuntimeEnv};
pub use domain::{CatalogPick, Game, GameFilter, OffsetPicker};
pub use error::AppError;
pub use extractors::CatalogQuery;
pub use infra::db::{bootstrap_db, connect_db};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use services::CatalogService;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
