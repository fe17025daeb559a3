use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use migration::MigrationCommand;
use picker_backend::adapters::games_sea::GameCreate;
use picker_backend::config::db::{DbKind, DbOwner, RuntimeEnv};
use picker_backend::{connect_db, CatalogRepoSea};
use tracing::{error, info};

#[derive(Clone, Copy, ValueEnum)]
enum Env {
    Prod,
    Test,
}

// In-memory SQLite is not offered: the database would vanish when the command exits.
#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Subcommand)]
enum Command {
    /// Apply all pending migrations
    Up,
    /// Roll back the last applied migration
    Down,
    /// Drop all tables, then apply all migrations
    Fresh,
    /// Roll back all applied migrations
    Reset,
    /// Roll back all applied migrations, then reapply them
    Refresh,
    /// Show applied and pending migrations
    Status,
    /// Load a JSON array of games into the catalog (all or nothing)
    Import {
        /// Path to the catalog file
        file: PathBuf,
    },
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Board game picker database tool")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test", global = true)]
    env: Env,

    /// Database type
    #[arg(short, long, value_enum, default_value = "postgres", global = true)]
    db: Db,
}

/// Parse a catalog file, naming the offending entry on failure.
fn parse_catalog(raw: &str) -> Result<Vec<GameCreate>, String> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| format!("catalog must be a JSON array: {e}"))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|e| format!("entry {index}: {e}"))
        })
        .collect()
}

async fn run(args: Args) -> Result<(), String> {
    let env = match args.env {
        Env::Prod => RuntimeEnv::Prod,
        Env::Test => RuntimeEnv::Test,
    };
    let db_kind = match args.db {
        Db::Postgres => DbKind::Postgres,
        Db::SqliteFile => DbKind::SqliteFile,
    };

    let command = match args.command {
        Command::Up => MigrationCommand::Up,
        Command::Down => MigrationCommand::Down,
        Command::Fresh => MigrationCommand::Fresh,
        Command::Reset => MigrationCommand::Reset,
        Command::Refresh => MigrationCommand::Refresh,
        Command::Status => MigrationCommand::Status,
        Command::Import { file } => return import(env, db_kind, file).await,
    };

    let conn = connect_db(env, db_kind, DbOwner::Owner)
        .await
        .map_err(|e| e.to_string())?;
    migration::migrate(&conn, command)
        .await
        .map_err(|e| format!("migration failed: {e}"))
}

async fn import(env: RuntimeEnv, db_kind: DbKind, file: PathBuf) -> Result<(), String> {
    let raw = tokio::fs::read_to_string(&file)
        .await
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let games = parse_catalog(&raw)?;

    let conn = connect_db(env, db_kind, DbOwner::Owner)
        .await
        .map_err(|e| e.to_string())?;
    migration::migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| format!("migration failed: {e}"))?;

    let inserted = CatalogRepoSea::new(conn)
        .import(&games)
        .await
        .map_err(|e| format!("import failed: {e}"))?;

    info!(inserted, file = %file.display(), "catalog imported");
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,migration_cli=info,picker_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_with_optional_fields() {
        let games = parse_catalog(
            r#"[
                {"name": "Catan", "min_players": 3, "max_players": 4, "avg_duration": 90,
                 "description": "Trade and build", "picture": "catan.jpg"},
                {"name": "Hanabi", "min_players": 2, "max_players": 5, "avg_duration": 25}
            ]"#,
        )
        .unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].picture, "catan.jpg");
        assert_eq!(games[1].description, "");
    }

    #[test]
    fn bad_entry_is_named_by_index() {
        let err = parse_catalog(
            r#"[
                {"name": "Ok", "min_players": 1, "max_players": 2, "avg_duration": 10},
                {"name": "Broken", "min_players": -1, "max_players": 2, "avg_duration": 10}
            ]"#,
        )
        .unwrap_err();
        assert!(err.starts_with("entry 1:"), "{err}");
    }

    #[test]
    fn non_array_is_rejected() {
        assert!(parse_catalog(r#"{"name": "Catan"}"#).is_err());
    }

    #[test]
    fn cli_parses_import_with_global_flags() {
        let args = Args::try_parse_from([
            "migration-cli",
            "import",
            "games.json",
            "--db",
            "sqlite-file",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Import { ref file } if file.ends_with("games.json")));
        assert!(matches!(args.db, Db::SqliteFile));
    }
}
