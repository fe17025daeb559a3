use tracing::info;

use crate::adapters::CatalogRepoSea;
use crate::config::db::{DbKind, RuntimeEnv};
use crate::domain::OffsetPicker;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::services::CatalogService;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
    rng_seed: Option<u64>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Prod,
            db_kind: None,
            rng_seed: None,
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let picker = OffsetPicker::new(self.rng_seed);

        let Some(kind) = self.db_kind else {
            return Ok(AppState::new_without_db(picker));
        };

        // single entrypoint: connect + migrate
        let conn = bootstrap_db(self.env, kind).await?;
        let size = CatalogService::new(CatalogRepoSea::new(conn.clone()))
            .catalog_size()
            .await?;
        info!(
            catalog_size = size,
            seeded = self.rng_seed.is_some(),
            "app state ready"
        );

        Ok(AppState::new(conn, picker))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
