//! Statistics handlers

use axum::{extract::State, Json};
use roster_service::{ApiResponse, StatsResponse, StatsService};

use crate::state::AppState;

/// Composite statistics report
///
/// GET /api/stats
///
/// Sections whose query fails come back empty, so this never errors.
pub async fn get_stats(State(state): State<AppState>) -> Json<ApiResponse<StatsResponse>> {
    let report = StatsService::new(state.service_context()).get_stats().await;
    Json(ApiResponse::new(report.into()))
}
