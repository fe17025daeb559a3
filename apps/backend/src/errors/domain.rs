//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure (catalog import only; query params never fail)
    Validation(String),
    /// Missing resource in domain terms
    NotFound(String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::NotFound(d) => write!(f, "not found: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        crate::infra::db_errors::map_db_err(e)
    }
}
