#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use picker_backend::adapters::games_sea::GameCreate;
use serde_json::Value;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// The two-game catalog used throughout: a quick 2-4 player game (id 1)
/// and a long 3-6 player game (id 2).
pub fn reference_catalog() -> Vec<GameCreate> {
    vec![
        GameCreate::new("Quick", 2, 4, 30)
            .with_description("A short filler")
            .with_picture("quick.png"),
        GameCreate::new("Long", 3, 6, 90)
            .with_description("An evening game")
            .with_picture("long.png"),
    ]
}

/// Read a successful JSON response.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    assert!(
        resp.status().is_success(),
        "expected success, got {}",
        resp.status()
    );
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"), "{content_type}");
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("valid JSON body")
}

/// Ids of a JSON array of games, in response order.
pub fn ids(json: &Value) -> Vec<i64> {
    json.as_array()
        .expect("array body")
        .iter()
        .map(|g| g["id"].as_i64().expect("integer id"))
        .collect()
}
