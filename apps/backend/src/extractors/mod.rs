pub mod catalog_query;

pub use catalog_query::CatalogQuery;
