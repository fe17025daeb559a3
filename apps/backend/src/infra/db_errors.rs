//! SeaORM -> DomainError translation.
//!
//! Adapters surface `sea_orm::DbErr`; this is the one place it is inspected.
//! The raw message is logged with the request trace id and replaced by a
//! sanitized detail before it can reach a response body.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::web::trace_ctx;

fn looks_like_timeout(msg: &str) -> bool {
    let lower = msg.to_ascii_lowercase();
    lower.contains("timed out") || lower.contains("timeout")
}

fn looks_like_missing_schema(msg: &str) -> bool {
    // Postgres: relation "games" does not exist; SQLite: no such table: games
    msg.contains("does not exist") || msg.contains("no such table")
}

/// Translate a `DbErr` into a `DomainError` with a sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found("Record not found");
        }
        sea_orm::DbErr::Type(_) | sea_orm::DbErr::TryIntoErr { .. } => {
            error!(trace_id = %trace_id, raw_error = %error_msg, "Stored row could not be decoded");
            return DomainError::infra(
                InfraErrorKind::DataCorruption,
                "Stored game data is invalid",
            );
        }
        _ => {}
    }

    if looks_like_timeout(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    if looks_like_missing_schema(&error_msg) {
        error!(trace_id = %trace_id, raw_error = %error_msg, "Catalog schema missing; were migrations run?");
        return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
