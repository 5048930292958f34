//! Integration tests for the store API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//!   (cargo run -p tamarind-cli -- migrate market)
//! - The market server running (cargo run -p tamarind-market)
//!
//! Run with: cargo test -p tamarind-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Base URL for the market API (configurable via environment).
fn market_base_url() -> String {
    std::env::var("MARKET_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running market server"]
async fn test_health() {
    let resp = client()
        .get(format!("{}/health", market_base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running market server and PostgreSQL"]
async fn test_readiness() {
    let resp = client()
        .get(format!("{}/health/ready", market_base_url()))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Public Read Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running market server and PostgreSQL"]
async fn test_store_list_is_public() {
    let resp = client()
        .get(format!("{}/stores", market_base_url()))
        .send()
        .await
        .expect("Failed to list stores");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore = "Requires running market server and PostgreSQL"]
async fn test_store_detail_unknown_id_is_not_found() {
    let resp = client()
        .get(format!("{}/stores/999999999", market_base_url()))
        .send()
        .await
        .expect("Failed to get store");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["code"], "STORE_NOT_FOUND");
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running market server and PostgreSQL"]
async fn test_search_without_parameters_matches_listing() {
    let http = client();
    let base_url = market_base_url();

    let all: Value = http
        .get(format!("{base_url}/stores"))
        .send()
        .await
        .expect("Failed to list stores")
        .json()
        .await
        .expect("Failed to parse listing");

    let searched: Value = http
        .get(format!("{base_url}/stores/search"))
        .send()
        .await
        .expect("Failed to search stores")
        .json()
        .await
        .expect("Failed to parse search");

    assert_eq!(
        all.as_array().map(Vec::len),
        searched.as_array().map(Vec::len)
    );
}

#[tokio::test]
#[ignore = "Requires running market server and PostgreSQL"]
async fn test_search_with_unknown_status_is_bad_request() {
    let resp = client()
        .get(format!("{}/stores/search?status=OPEN", market_base_url()))
        .send()
        .await
        .expect("Failed to search stores");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["code"], "STORE_BAD_REQUEST");
}

#[tokio::test]
#[ignore = "Requires running market server and PostgreSQL"]
async fn test_search_with_closed_status_returns_only_closed_stores() {
    let resp = client()
        .get(format!("{}/stores/search?status=CLOSED", market_base_url()))
        .send()
        .await
        .expect("Failed to search stores");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse body");
    for store in body.as_array().expect("Expected array") {
        assert_eq!(store["status"], "CLOSED");
    }
}

#[tokio::test]
#[ignore = "Requires running market server and PostgreSQL"]
async fn test_search_records_keywords() {
    let http = client();
    let base_url = market_base_url();
    let keyword = format!("probe-{}", std::process::id());

    let resp = http
        .get(format!("{base_url}/stores/search?store_name={keyword}"))
        .send()
        .await
        .expect("Failed to search stores");
    assert_eq!(resp.status(), StatusCode::OK);

    // The keyword is recorded even though nothing matched
    let database_url = std::env::var("MARKET_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("MARKET_DATABASE_URL must be set");
    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let count: i64 = sqlx::query_scalar(
        "SELECT search_count FROM search_keywords WHERE keyword = $1",
    )
    .bind(&keyword)
    .fetch_one(&pool)
    .await
    .expect("Keyword was not recorded");

    assert!(count >= 1);
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running market server and PostgreSQL"]
async fn test_store_create_requires_auth() {
    let resp = client()
        .post(format!("{}/stores", market_base_url()))
        .json(&serde_json::json!({
            "name": "Joe's Diner",
            "created_at": "2026-01-01T09:00:00Z",
            "closed_at": "2026-01-01T21:00:00Z",
            "minimum_order_quantity": 1,
            "announcement": "Grand opening",
            "status": "ACTIVE",
        }))
        .send()
        .await
        .expect("Failed to post store");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running market server and PostgreSQL"]
async fn test_store_close_requires_auth() {
    let resp = client()
        .delete(format!("{}/stores/1", market_base_url()))
        .send()
        .await
        .expect("Failed to delete store");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
