//! Error body test helpers.
//!
//! Assert the `{error, details, code, trace_id}` error contract without
//! depending on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's error body.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub error: String,
    pub details: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert that response parts conform to the error contract:
/// - HTTP status matches expected
/// - x-trace-id header exists and matches body trace_id
/// - `code` matches expected
///
/// Returns the parsed body for further checks.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "error body should be JSON, got content-type '{content_type}'"
    );

    let body: ErrorBodyLike =
        serde_json::from_slice(body_bytes).expect("Response body should be a JSON error body");

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");

    assert_eq!(
        body.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );
    assert_eq!(body.code, expected_code);
    assert!(!body.error.is_empty(), "error summary should not be empty");

    body
}

/// Same as [`assert_error_body_from_parts`], for an Actix test service response.
pub async fn assert_error_body_from_service_response(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(status, &headers, &body, expected_code, expected_status)
}
