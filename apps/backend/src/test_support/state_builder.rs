use sea_orm::{ConnectOptions, Database};

use crate::adapters::games_sea::{insert_games, GameCreate};
use crate::config::db::{DbKind, RuntimeEnv};
use crate::domain::OffsetPicker;
use crate::error::AppError;
use crate::infra::state::build_state;
use crate::state::app_state::AppState;

/// Fresh, migrated, empty in-memory catalog.
///
/// Each call gets its own database, so tests do not share rows.
pub async fn memory_state(rng_seed: Option<u64>) -> Result<AppState, AppError> {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .with_rng_seed(rng_seed)
        .build()
        .await
}

/// Connected in-memory database with no `games` table.
pub async fn unmigrated_state() -> Result<AppState, AppError> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.min_connections(1).max_connections(1).sqlx_logging(false);
    let conn = Database::connect(opt).await?;
    Ok(AppState::new(conn, OffsetPicker::new(Some(0))))
}

/// Insert `games` into the state's catalog, bypassing validation.
pub async fn seed_games(state: &AppState, games: &[GameCreate]) -> Result<(), AppError> {
    let db = state.db().ok_or_else(AppError::db_unavailable)?;
    insert_games(db, games).await?;
    Ok(())
}
