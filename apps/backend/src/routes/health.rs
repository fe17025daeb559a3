use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::warn;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Board game picker API. Try GET /api/games or /api/games/random")
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<&'static str>,
    migrations: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog_size: Option<u64>,
    time: String,
}

struct DbHealth {
    migrations: String,
    catalog_size: Option<u64>,
}

async fn check_db(db: &DatabaseConnection, app_state: &AppState) -> Result<DbHealth, AppError> {
    db.query_one(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1 AS health_check".to_string(),
    ))
    .await?;

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };

    let catalog_size = match app_state.catalog() {
        Some(catalog) => catalog.catalog_size().await.ok(),
        None => None,
    };

    Ok(DbHealth {
        migrations,
        catalog_size,
    })
}

/// Always 200; the `db` field carries storage health.
async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let checked = match require_db(&app_state) {
        Ok(db) => check_db(db, &app_state).await,
        Err(e) => Err(e),
    };

    let (db, db_error, migrations, catalog_size) = match checked {
        Ok(h) => ("ok", None, h.migrations, h.catalog_size),
        Err(e) => {
            warn!(error = %e, "health check: database not usable");
            ("error", Some("database unavailable"), "unknown".to_string(), None)
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_error,
        migrations,
        catalog_size,
        time,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
