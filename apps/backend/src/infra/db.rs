use std::future::Future;
use std::path::Path;
use std::process;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, sqlite_path, DbKind, DbOwner, RuntimeEnv};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

fn db_engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all attempts are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!("connection_retry=success attempts={attempt} interval_ms={interval_ms}");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(
                    "connection_retry=failed attempt={attempt} max_attempts={max_attempts} interval_ms={interval_ms}"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(url: &str, kind: DbKind) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);

    match kind {
        // every connection to sqlite::memory: is its own database
        DbKind::SqliteMemory => {
            opt.min_connections(1).max_connections(1);
        }
        DbKind::SqliteFile => {
            opt.min_connections(1).max_connections(4);
        }
        DbKind::Postgres => {
            opt.min_connections(1)
                .max_connections(10)
                .idle_timeout(Duration::from_secs(30));
        }
    }
    opt
}

/// `mode=rwc` creates the file but not its directory.
async fn ensure_sqlite_dir(path: &str) -> Result<(), AppError> {
    let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    tokio::fs::create_dir_all(dir).await.map_err(|e| {
        AppError::config(format!(
            "Cannot create sqlite directory '{}': {e}",
            dir.display()
        ))
    })
}

/// Open a pool for the given environment, engine and owner.
/// This function does NOT run any migrations.
pub async fn connect_db(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    if matches!(kind, DbKind::SqliteFile) {
        ensure_sqlite_dir(&sqlite_path()).await?;
    }

    let url = db_url(env, kind, owner)?;
    let opt = connect_options(&url, kind);

    let conn = if matches!(kind, DbKind::Postgres) {
        retry_connection(
            || {
                let opt = opt.clone();
                async move { Database::connect(opt).await.map_err(AppError::from) }
            },
            CONNECT_ATTEMPTS,
            CONNECT_INTERVAL_MS,
        )
        .await?
    } else {
        Database::connect(opt).await?
    };

    info!(
        "pool=create engine={} env={env:?} owner={owner:?}",
        db_engine(kind)
    );
    Ok(conn)
}

/// Connect, apply pending migrations and return the pool the app serves from.
///
/// Postgres migrates through an owner connection and serves through the app
/// role. SQLite has no roles, so the migrated pool is returned as is; for
/// `SqliteMemory` that is also the only way the schema stays visible.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    info!(
        "bootstrap=start env={env:?} db_kind={kind:?} engine={} pid={}",
        db_engine(kind),
        process::id()
    );

    let conn = match kind {
        DbKind::Postgres => {
            let owner = connect_db(env, kind, DbOwner::Owner).await?;
            migration::migrate(&owner, MigrationCommand::Up).await?;
            if let Err(e) = owner.close().await {
                warn!(error = %e, "owner pool did not close cleanly");
            }
            connect_db(env, kind, DbOwner::App).await?
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            let conn = connect_db(env, kind, DbOwner::App).await?;
            migration::migrate(&conn, MigrationCommand::Up).await?;
            conn
        }
    };

    info!("bootstrap=ready");
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::atomic::{AtomicU32, Ordering};

    use serial_test::serial;

    use super::*;

    #[tokio::test]
    async fn retry_returns_first_success() {
        let calls = AtomicU32::new(0);
        let out = retry_connection(
            || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(AppError::db_unavailable())
                    } else {
                        Ok(n)
                    }
                }
            },
            5,
            1,
        )
        .await
        .unwrap();
        assert_eq!(out, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn retry_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let out: Result<(), AppError> = retry_connection(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(AppError::db_unavailable()) }
            },
            3,
            1,
        )
        .await;
        assert!(out.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn bootstrap_in_memory_creates_catalog_table() {
        let conn = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteMemory)
            .await
            .unwrap();
        let applied = migration::count_applied_migrations(&conn).await.unwrap();
        assert_eq!(applied, 1);
    }

    #[tokio::test]
    #[serial]
    async fn sqlite_file_connect_creates_missing_directory() {
        let root = env::temp_dir().join(format!("picker-{}", uuid::Uuid::new_v4()));
        let path = root.join("data").join("picker.sqlite");
        env::set_var("SQLITE_DB_PATH", &path);

        let conn = connect_db(RuntimeEnv::Test, DbKind::SqliteFile, DbOwner::App).await;
        env::remove_var("SQLITE_DB_PATH");

        let conn = conn.unwrap();
        assert!(root.join("data").is_dir());
        conn.close().await.unwrap();
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn bare_file_name_needs_no_directory() {
        ensure_sqlite_dir("picker.sqlite").await.unwrap();
    }
}
