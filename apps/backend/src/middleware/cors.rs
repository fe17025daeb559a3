use std::env;

use actix_cors::Cors;
use actix_web::http::header;

use super::request_trace::REQUEST_ID_HEADER;

const DEFAULT_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

/// Parse `CORS_ALLOWED_ORIGINS`: comma separated, http(s) only, empty and
/// "null" entries ignored. Falls back to localhost when nothing is valid.
pub fn allowed_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}

/// CORS for a read-only API.
pub fn cors_middleware() -> Cors {
    let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .max_age(3600);

    for origin in allowed_origins(&raw) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
