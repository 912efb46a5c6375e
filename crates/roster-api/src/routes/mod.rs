//! Route definitions
//!
//! API routes are mounted under /api; health probes sit at the root.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::{export, filters, health, members, stats};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Serve the front-end from `dir` for every path no route matched
///
/// Unknown paths fall back to `index.html` so client-side routing works.
pub fn with_static_fallback(router: Router<AppState>, dir: &Path) -> Router<AppState> {
    let index = dir.join("index.html");
    router.fallback_service(
        ServeDir::new(dir)
            .append_index_html_on_directories(true)
            .not_found_service(ServeFile::new(index)),
    )
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(member_routes())
        .route("/stats", get(stats::get_stats))
        .route("/filters", get(filters::get_filter_options))
        .route("/export/csv", get(export::export_csv))
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route("/members/search", get(members::search_members))
        .route("/members/count", get(members::count_members))
        .route("/members/:id", get(members::get_member))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{HeaderMap, Request, StatusCode},
        Router,
    };
    use roster_common::AppConfig;
    use roster_service::testing::{sample_members, FakeRepository};
    use tower::ServiceExt;

    use crate::server::create_app;
    use crate::state::AppState;

    fn app(repo: FakeRepository) -> Router {
        let state = AppState::new(
            repo.into_context(),
            AppConfig::with_database_url("postgres://unused"),
        );
        create_app(state).unwrap()
    }

    fn healthy_app() -> Router {
        app(FakeRepository::with_members(sample_members()))
    }

    fn failing_app(operations: &[&'static str]) -> Router {
        let repo = operations
            .iter()
            .copied()
            .fold(FakeRepository::with_members(sample_members()), FakeRepository::failing);
        app(repo)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, _, body) = get(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(healthy_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_without_database() {
        let (status, body) = get_json(healthy_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["checks"]["database"], "unhealthy");
    }

    #[tokio::test]
    async fn test_list_members_envelope() {
        let (status, body) = get_json(healthy_app(), "/api/members?page=1&limit=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["pagination"]["totalItems"], 4);
        assert_eq!(body["pagination"]["totalPages"], 2);
        assert_eq!(body["pagination"]["hasNext"], true);
        assert_eq!(body["data"][0]["name"], "Budi Santoso");
        assert_eq!(body["data"][0]["isChair"], true);
    }

    #[tokio::test]
    async fn test_lenient_query_parameters() {
        let (status, body) = get_json(
            healthy_app(),
            "/api/members?page=abc&limit=xyz&minAge=old&sortBy=nope",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["currentPage"], 1);
        assert_eq!(body["pagination"]["pageSize"], 25);
        assert_eq!(body["pagination"]["totalItems"], 4);
    }

    #[tokio::test]
    async fn test_search_and_flags() {
        let (_, body) = get_json(healthy_app(), "/api/members/search?q=ahmad").await;
        assert_eq!(body["pagination"]["totalItems"], 2);
        assert_eq!(body["data"][0]["id"], 3);

        let (_, body) = get_json(healthy_app(), "/api/members?isChair=1").await;
        assert_eq!(body["pagination"]["totalItems"], 1);

        let (_, body) = get_json(healthy_app(), "/api/members?isChair=yes").await;
        assert_eq!(body["pagination"]["totalItems"], 4);
    }

    #[tokio::test]
    async fn test_overlong_query_is_rejected() {
        let uri = format!("/api/members?q={}", "a".repeat(201));
        let (status, body) = get_json(healthy_app(), &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_count() {
        let (status, body) = get_json(healthy_app(), "/api/members/count?minAge=40").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 2);
    }

    #[tokio::test]
    async fn test_get_member_by_id() {
        let (status, body) = get_json(healthy_app(), "/api/members/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Siti Aminah");

        let (status, body) = get_json(healthy_app(), "/api/members/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, body) = get_json(healthy_app(), "/api/members/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_PATH_PARAMETER");
    }

    #[tokio::test]
    async fn test_stats_and_filters() {
        let (status, body) = get_json(healthy_app(), "/api/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalMembers"], 4);
        assert_eq!(body["data"]["leadership"]["chair"], 1);
        assert_eq!(body["data"]["leadership"]["viceChair"], 1);
        assert_eq!(body["data"]["leadership"]["member"], 2);
        assert_eq!(body["data"]["recentMembers"][0]["id"], 4);

        let (status, body) = get_json(healthy_app(), "/api/filters").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["factions"][0], "Fraksi Ahmad Dahlan");
        assert_eq!(body["data"]["factions"][1], "Golkar");
    }

    #[tokio::test]
    async fn test_store_failure() {
        let (status, body) = get_json(failing_app(&["search", "count"]), "/api/members").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
        assert_eq!(body["error"]["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_failed_stats_sections_are_empty() {
        let app = failing_app(&["count_by_faction", "leadership_counts"]);
        let (status, body) = get_json(app, "/api/stats").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["byFaction"].as_array().unwrap().is_empty());
        assert!(body["data"]["leadership"].is_null());
        assert_eq!(body["data"]["totalMembers"], 4);
        assert!(!body["data"]["byProvince"].as_array().unwrap().is_empty());

        let (status, body) = get_json(failing_app(&["distinct_values"]), "/api/filters").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["factions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_csv_export() {
        let (status, headers, body) = get(healthy_app(), "/api/export/csv").await;
        let text = String::from_utf8(body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "text/csv; charset=utf-8");
        assert!(headers["content-disposition"]
            .to_str()
            .unwrap()
            .contains("members.csv"));
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("\"Dewi \"\"Ibu\"\" Lestari\""));
    }

    #[tokio::test]
    async fn test_request_id_is_set() {
        let (_, headers, _) = get(healthy_app(), "/api/members").await;
        assert!(headers.contains_key("x-request-id"));
    }
}
