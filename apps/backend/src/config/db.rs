use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Runtime environment; selects which database name is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Enforces the `_test` naming rule
    Test,
}

/// Storage engine backing the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Process-local; migrated and seeded per process (tests, demos)
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unsupported PICKER_DB value '{other}' (expected postgres | sqlite-file | sqlite-memory)"
            ))),
        }
    }
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (read path)
    App,
    /// Owner-level access (migrations, catalog import)
    Owner,
}

/// Reads `PICKER_DB`, defaulting to Postgres.
pub fn db_kind_from_env() -> Result<DbKind, AppError> {
    match env::var("PICKER_DB") {
        Ok(raw) => raw.parse(),
        Err(_) => Ok(DbKind::Postgres),
    }
}

/// Builds a connection URL for the given environment, engine and owner.
pub fn db_url(env: RuntimeEnv, kind: DbKind, owner: DbOwner) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => postgres_url(env, owner),
        DbKind::SqliteFile => Ok(format!("sqlite://{}?mode=rwc", sqlite_path())),
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

fn postgres_url(env: RuntimeEnv, owner: DbOwner) -> Result<String, AppError> {
    let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
    let db_name = db_name(env)?;
    let (username, password) = credentials(owner)?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

/// Location of the sqlite-file database; its directory is created on connect.
pub fn sqlite_path() -> String {
    env::var("SQLITE_DB_PATH").unwrap_or_else(|_| "./data/picker.sqlite".to_string())
}

fn db_name(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("PICKER_OWNER_USER")?,
            must_var("PICKER_OWNER_PASSWORD")?,
        )),
    }
}

fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
