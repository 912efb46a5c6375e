//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! field names. Successful payloads are wrapped in `{ success: true, ... }`.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Paginated response with offset pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: PaginationResponse,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, pagination: PaginationResponse) -> Self {
        Self {
            success: true,
            data,
            pagination,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: i64,
    pub page_size: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

// ============================================================================
// Member Responses
// ============================================================================

/// One member record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: i64,
    pub province_id: Option<i32>,
    pub name: Option<String>,
    pub birthplace: Option<String>,
    pub birth_date: Option<String>,
    pub position: Option<String>,
    pub faction: Option<String>,
    pub address: Option<String>,
    pub remarks: Option<String>,
    pub age: Option<i32>,
    pub province: Option<String>,
    pub is_chair: bool,
    pub is_vice_chair: bool,
    pub created_at: DateTime<Utc>,
}

/// Result of a count request
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CountResponse {
    pub total: i64,
}

// ============================================================================
// Statistics Responses
// ============================================================================

/// Full statistics report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_members: i64,
    pub by_faction: Vec<GroupCountResponse>,
    pub by_province: Vec<GroupCountResponse>,
    pub by_position: Vec<GroupCountResponse>,
    pub age_groups: Vec<AgeGroupResponse>,
    pub gender: Vec<GenderCountResponse>,
    /// `None` when the leadership section could not be computed
    pub leadership: Option<LeadershipResponse>,
    pub age_summary: AgeSummaryResponse,
    pub recent_members: Vec<RecentMemberResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCountResponse {
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupResponse {
    pub age_group: String,
    pub count: i64,
    pub average_age: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderCountResponse {
    pub gender: String,
    pub count: i64,
}

/// Leadership breakdown; the three counts sum to the total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipResponse {
    pub chair: i64,
    pub vice_chair: i64,
    pub member: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeSummaryResponse {
    pub average_age: Option<f64>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentMemberResponse {
    pub id: i64,
    pub name: Option<String>,
    pub faction: Option<String>,
    pub position: Option<String>,
    pub province: Option<String>,
}

/// Distinct values for filter dropdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptionsResponse {
    pub factions: Vec<String>,
    pub provinces: Vec<String>,
    pub positions: Vec<String>,
    pub birthplaces: Vec<String>,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let json = serde_json::to_value(ApiResponse::new(CountResponse { total: 7 })).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": { "total": 7 } }));
    }

    #[test]
    fn test_pagination_is_camel_case() {
        let page = PaginatedResponse::<i32>::new(
            vec![],
            PaginationResponse {
                current_page: 3,
                total_pages: 3,
                total_items: 53,
                page_size: 25,
                has_next: false,
                has_prev: true,
            },
        );
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["pagination"]["currentPage"], 3);
        assert_eq!(json["pagination"]["totalItems"], 53);
        assert_eq!(json["pagination"]["hasNext"], false);
        assert_eq!(json["pagination"]["hasPrev"], true);
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
    }
}
