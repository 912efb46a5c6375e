//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `DATABASE_URL`. They create the `members` table if it is missing and
//! remove the rows they insert.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_search_by_marker() {
    if !check_test_env().await {
        return;
    }

    let seeded = SeededMembers::seed().await.unwrap();
    let server = TestServer::start().await.expect("Failed to start server");

    let path = format!("/api/members/search?q={}&sortBy=age&sortOrder=ASC", seeded.marker);
    let response = server.get(&path).await.unwrap();
    let page: PageEnvelope<Member> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(page.success);
    assert_eq!(page.pagination.total_items, 3);
    assert_eq!(page.pagination.total_pages, 1);
    assert!(!page.pagination.has_next);
    let ages: Vec<Option<i32>> = page.data.iter().map(|m| m.age).collect();
    assert_eq!(ages, vec![Some(40), Some(58), None]);

    seeded.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_filters_and_count_agree() {
    if !check_test_env().await {
        return;
    }

    let seeded = SeededMembers::seed().await.unwrap();
    let server = TestServer::start().await.expect("Failed to start server");

    let filters = format!("q={}&minAge=35&isViceChair=true", seeded.marker);

    let response = server.get(&format!("/api/members?{filters}")).await.unwrap();
    let page: PageEnvelope<Member> = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/api/members/count?{filters}")).await.unwrap();
    let count: Envelope<Count> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.data.len() as i64, count.data.total);
    assert_eq!(count.data.total, 1);
    assert!(page.data[0].is_vice_chair);

    seeded.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_pagination_walk() {
    if !check_test_env().await {
        return;
    }

    let seeded = SeededMembers::seed().await.unwrap();
    let server = TestServer::start().await.expect("Failed to start server");

    let mut seen = Vec::new();
    for page in 1..=3 {
        let path = format!("/api/members?q={}&limit=1&page={page}", seeded.marker);
        let response = server.get(&path).await.unwrap();
        let body: PageEnvelope<Member> = assert_json(response, StatusCode::OK).await.unwrap();

        assert_eq!(body.pagination.total_pages, 3);
        assert_eq!(body.pagination.has_prev, page > 1);
        assert_eq!(body.pagination.has_next, page < 3);
        seen.extend(body.data.into_iter().map(|m| m.id));
    }

    seen.sort_unstable();
    assert_eq!(seen, seeded.ids);

    seeded.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_get_member_by_id() {
    if !check_test_env().await {
        return;
    }

    let seeded = SeededMembers::seed().await.unwrap();
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&format!("/api/members/{}", seeded.ids[0])).await.unwrap();
    let member: Envelope<Member> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(member.data.is_chair);
    assert_eq!(member.data.faction.as_deref(), Some("Fraksi Integrasi"));

    let response = server.get("/api/members/-1").await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!error.success);
    assert_eq!(error.error.code, "NOT_FOUND");

    let response = server.get("/api/members/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    seeded.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_overlong_query() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/members?q={}", "x".repeat(250)))
        .await
        .unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

// ============================================================================
// Aggregate Tests
// ============================================================================

#[tokio::test]
async fn test_stats_report() {
    if !check_test_env().await {
        return;
    }

    let seeded = SeededMembers::seed().await.unwrap();
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/stats").await.unwrap();
    let stats: Envelope<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let data = &stats.data;

    // Other tests seed rows concurrently, so only lower bounds hold here
    let total = data["totalMembers"].as_i64().unwrap();
    assert!(total >= 3);
    assert!(data["leadership"]["chair"].as_i64().unwrap() >= 1);
    assert!(data["leadership"]["viceChair"].as_i64().unwrap() >= 1);

    let buckets: Vec<&str> = data["ageGroups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["ageGroup"].as_str().unwrap())
        .collect();
    assert!(buckets.contains(&"30-40"));
    assert!(buckets.contains(&"51-60"));
    assert!(buckets.contains(&"unknown"));
    assert_eq!(data["gender"].as_array().unwrap().len(), 3);
    assert!(data["recentMembers"].as_array().unwrap().len() <= 5);

    seeded.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_filter_options() {
    if !check_test_env().await {
        return;
    }

    let seeded = SeededMembers::seed().await.unwrap();
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/filters").await.unwrap();
    let options: Envelope<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();

    let factions = options.data["factions"].as_array().unwrap();
    assert!(factions.iter().any(|f| f == "Fraksi Integrasi"));
    assert!(factions.iter().all(|f| f != "-"));

    seeded.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_csv_export() {
    if !check_test_env().await {
        return;
    }

    let seeded = SeededMembers::seed().await.unwrap();
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/export/csv").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));

    let body = response.text().await.unwrap();
    assert!(body.starts_with("id,province_id,name,"));
    assert!(body.contains(&format!("\"Dewi \"\"Ibu\"\" {}\"", seeded.marker)));

    seeded.cleanup().await.unwrap();
}
