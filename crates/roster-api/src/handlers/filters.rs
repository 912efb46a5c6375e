//! Filter option handlers

use axum::{extract::State, Json};
use roster_service::{ApiResponse, FilterOptionService, FilterOptionsResponse};

use crate::state::AppState;

/// Distinct values for filter dropdowns
///
/// GET /api/filters
pub async fn get_filter_options(
    State(state): State<AppState>,
) -> Json<ApiResponse<FilterOptionsResponse>> {
    let options = FilterOptionService::new(state.service_context())
        .get_filter_options()
        .await;
    Json(ApiResponse::new(options.into()))
}
