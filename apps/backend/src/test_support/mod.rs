//! Helpers for integration tests: in-memory app state, catalog seeding and
//! an Actix test service builder.

pub mod app_builder;
pub mod state_builder;

pub use app_builder::{create_test_app_builder, TestAppBuilder};
pub use state_builder::{memory_state, seed_games, unmigrated_state};
