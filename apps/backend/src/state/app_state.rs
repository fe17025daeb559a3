use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::adapters::CatalogRepoSea;
use crate::domain::OffsetPicker;
use crate::services::CatalogService;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Random source shared by every worker for `/random` draws
    pub picker: Arc<OffsetPicker>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, picker: OffsetPicker) -> Self {
        Self {
            db: Some(db),
            picker: Arc::new(picker),
        }
    }

    /// State without a database connection; every catalog call fails with
    /// `DB_UNAVAILABLE`.
    pub fn new_without_db(picker: OffsetPicker) -> Self {
        Self {
            db: None,
            picker: Arc::new(picker),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Catalog service over the current connection, if any.
    pub fn catalog(&self) -> Option<CatalogService<CatalogRepoSea>> {
        self.db
            .clone()
            .map(|db| CatalogService::new(CatalogRepoSea::new(db)))
    }
}
