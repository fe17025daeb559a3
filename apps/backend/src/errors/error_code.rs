//! Error codes for the picker API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Route or resource not found
    NotFound,

    // System Errors
    /// Query against the catalog store failed
    DbError,
    /// Catalog store unreachable or not configured
    DbUnavailable,
    /// Catalog store did not answer in time
    DbTimeout,
    /// Stored row violates the game invariants
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical string for this code, as it appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
