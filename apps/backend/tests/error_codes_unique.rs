use std::collections::HashSet;

use picker_backend::errors::ErrorCode;

#[test]
fn error_codes_are_unique_screaming_snake() {
    let all = [
        // Keep in sync with ErrorCode enum variants
        ErrorCode::ValidationError,
        ErrorCode::NotFound,
        ErrorCode::DbError,
        ErrorCode::DbUnavailable,
        ErrorCode::DbTimeout,
        ErrorCode::DataCorruption,
        ErrorCode::Internal,
        ErrorCode::ConfigError,
    ];

    let mut seen = HashSet::new();
    for code in all {
        let s = code.as_str();
        assert!(seen.insert(s), "Duplicate error code string: {s}");
        assert!(
            s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
            "Error code should be SCREAMING_SNAKE_CASE: {s}"
        );
    }
}
