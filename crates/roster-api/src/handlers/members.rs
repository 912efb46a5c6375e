//! Member handlers
//!
//! Endpoints for listing, searching, counting and fetching members.

use axum::{extract::State, Json};
use roster_service::{
    ApiResponse, CountResponse, MemberQuery, MemberResponse, PaginatedResponse, SearchService,
    ServiceError,
};

use crate::extractors::{MemberIdPath, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// List members, optionally narrowed by a query and filters
///
/// GET /api/members
pub async fn list_members(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<MemberQuery>,
) -> ApiResult<Json<PaginatedResponse<MemberResponse>>> {
    let service = SearchService::new(state.service_context());
    let result = service
        .search(query.query_text(), query.search_options())
        .await?;

    let members: Vec<MemberResponse> = result.rows.into_iter().map(MemberResponse::from).collect();
    Ok(Json(PaginatedResponse::new(members, result.pagination.into())))
}

/// Free-text search; accepts the same parameters as the listing
///
/// GET /api/members/search
pub async fn search_members(
    state: State<AppState>,
    query: ValidatedQuery<MemberQuery>,
) -> ApiResult<Json<PaginatedResponse<MemberResponse>>> {
    list_members(state, query).await
}

/// Count matching members
///
/// GET /api/members/count
pub async fn count_members(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<MemberQuery>,
) -> ApiResult<Json<ApiResponse<CountResponse>>> {
    let service = SearchService::new(state.service_context());
    let total = service.count(query.query_text(), &query.filters()).await?;
    Ok(Json(ApiResponse::new(CountResponse { total })))
}

/// Get one member by ID
///
/// GET /api/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    MemberIdPath(id): MemberIdPath,
) -> ApiResult<Json<ApiResponse<MemberResponse>>> {
    let service = SearchService::new(state.service_context());
    let member = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Member", id.to_string()))?;

    Ok(Json(ApiResponse::new(member.into())))
}
