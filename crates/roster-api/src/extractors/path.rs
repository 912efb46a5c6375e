//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Numeric member ID from the `:id` path segment
#[derive(Debug, Clone, Copy)]
pub struct MemberIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for MemberIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        raw.trim()
            .parse()
            .map(MemberIdPath)
            .map_err(|_| ApiError::invalid_path(format!("member id must be an integer, got {raw:?}")))
    }
}
