//! Application services layered over the repo traits.

pub mod catalog;

pub use catalog::CatalogService;
