//! Repository traits for domain layer.

pub mod catalog;

pub use catalog::CatalogRepo;
