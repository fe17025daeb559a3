//! Adapters for external dependencies.

pub mod games_sea;

pub use games_sea::CatalogRepoSea;
