use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::errors::ErrorCode;
use crate::web::trace_ctx;

/// Uniform error body returned by every failing endpoint.
///
/// `error` is a stable, human readable summary for the code; `details` is
/// already sanitized (raw store errors are logged, never placed here).
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation {
        code: ErrorCode,
        detail: String,
        status: StatusCode,
    },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable")]
    DbUnavailable,
    #[error("Database timeout: {detail}")]
    Timeout { detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable => ErrorCode::DbUnavailable,
            AppError::Timeout { .. } => ErrorCode::DbTimeout,
            AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Db { detail } => detail.clone(),
            AppError::DbUnavailable => "Game catalog is temporarily unavailable".to_string(),
            AppError::Timeout { detail } => detail.clone(),
            AppError::Internal { detail, .. } => detail.clone(),
            // Config details can carry env var names and paths
            AppError::Config { .. } => "Server is misconfigured".to_string(),
        }
    }

    /// Storage failures of every flavor surface as 500.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { status, .. } => *status,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Db { .. }
            | AppError::DbUnavailable
            | AppError::Timeout { .. }
            | AppError::Internal { .. }
            | AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Short summary placed in the `error` field of the body.
    fn summary(&self) -> &'static str {
        match self.code() {
            ErrorCode::ValidationError => "Invalid request",
            ErrorCode::NotFound => "Not found",
            ErrorCode::DbError
            | ErrorCode::DbUnavailable
            | ErrorCode::DbTimeout
            | ErrorCode::DataCorruption => "Failed to fetch games",
            ErrorCode::Internal | ErrorCode::ConfigError => "Internal server error",
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => AppError::invalid(ErrorCode::ValidationError, detail),
            DomainError::NotFound(detail) => AppError::not_found(ErrorCode::NotFound, detail),
            DomainError::Infra(InfraErrorKind::DbUnavailable, _) => AppError::DbUnavailable,
            DomainError::Infra(InfraErrorKind::Timeout, detail) => AppError::Timeout { detail },
            DomainError::Infra(InfraErrorKind::DataCorruption, detail) => AppError::Internal {
                code: ErrorCode::DataCorruption,
                detail,
            },
            DomainError::Infra(InfraErrorKind::Other(_), detail) => AppError::db(detail),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(DomainError::from(e))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        let body = ErrorBody {
            error: self.summary().to_string(),
            details: self.detail(),
            code: self.code().to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .insert_header(("x-trace-id", trace_id))
            .json(body)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[test]
    fn maps_infra_kinds_to_codes() {
        let down: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
        assert_eq!(down.code(), ErrorCode::DbUnavailable);
        assert_eq!(down.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let slow: AppError = DomainError::infra(InfraErrorKind::Timeout, "slow").into();
        assert_eq!(slow.code(), ErrorCode::DbTimeout);
        assert_eq!(slow.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bad: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad row").into();
        assert_eq!(bad.code(), ErrorCode::DataCorruption);

        let other: AppError =
            DomainError::infra(InfraErrorKind::Other("DbErr".into()), "failed").into();
        assert_eq!(other.code(), ErrorCode::DbError);
        assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn maps_validation_and_not_found() {
        let v: AppError = DomainError::validation("min_players > max_players").into();
        assert_eq!(v.code(), ErrorCode::ValidationError);
        assert_eq!(v.status(), StatusCode::BAD_REQUEST);

        let nf: AppError = DomainError::not_found("no such thing").into();
        assert_eq!(nf.code(), ErrorCode::NotFound);
        assert_eq!(nf.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn error_body_has_trace_header_and_generic_text() {
        let resp = trace_ctx::with_trace_id("trace-abc".to_string(), async {
            AppError::db_unavailable().error_response()
        })
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let header = resp
            .headers()
            .get("x-trace-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        assert_eq!(header.as_deref(), Some("trace-abc"));

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Failed to fetch games");
        assert_eq!(json["code"], "DB_UNAVAILABLE");
        assert_eq!(json["trace_id"], "trace-abc");
        assert_eq!(json["details"], "Game catalog is temporarily unavailable");
    }

    #[test]
    fn config_detail_is_not_exposed() {
        let err = AppError::config("Required environment variable 'APP_DB_PASSWORD' is not set");
        assert_eq!(err.detail(), "Server is misconfigured");
        assert!(err.to_string().contains("APP_DB_PASSWORD"));
    }
}
