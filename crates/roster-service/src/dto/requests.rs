//! Request DTOs for API endpoints
//!
//! Query-string parameters are accepted as raw strings and interpreted
//! leniently: unparsable numbers count as absent, and unknown sort fields
//! fall back to the default.

use roster_core::value_objects::{PageRequest, SearchFilters, SortSpec};
use serde::Deserialize;
use validator::Validate;

use crate::services::SearchOptions;

/// Longest accepted free-text query, in characters
pub const MAX_QUERY_LENGTH: u64 = 200;

// ============================================================================
// Member Requests
// ============================================================================

/// Query parameters for listing, searching and counting members
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberQuery {
    #[validate(length(max = MAX_QUERY_LENGTH, message = "q must be at most 200 characters"))]
    pub q: Option<String>,

    pub faction: Option<String>,
    pub province: Option<String>,
    pub position: Option<String>,
    pub min_age: Option<String>,
    pub max_age: Option<String>,
    pub is_chair: Option<String>,
    pub is_vice_chair: Option<String>,

    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl MemberQuery {
    /// Free-text query as sent; trimming happens in the service
    pub fn query_text(&self) -> Option<&str> {
        self.q.as_deref()
    }

    /// Structured filters
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            faction: self.faction.clone(),
            province: self.province.clone(),
            position: self.position.clone(),
            min_age: parse_int(self.min_age.as_deref()).and_then(|v| i32::try_from(v).ok()),
            max_age: parse_int(self.max_age.as_deref()).and_then(|v| i32::try_from(v).ok()),
            chair_only: parse_flag(self.is_chair.as_deref()),
            vice_chair_only: parse_flag(self.is_vice_chair.as_deref()),
        }
        .normalized()
    }

    pub fn sort(&self) -> SortSpec {
        SortSpec::from_params(self.sort_by.as_deref(), self.sort_order.as_deref())
    }

    /// Page window, coerced into range
    pub fn page(&self) -> PageRequest {
        PageRequest::new(
            parse_int(self.page.as_deref()),
            parse_int(self.limit.as_deref()),
        )
    }

    /// Filters, sort and page bundled for the search service
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            filters: self.filters(),
            sort: self.sort(),
            page: self.page(),
        }
    }
}

/// Integer parameter; anything unparsable is treated as absent
fn parse_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Boolean flag: `true` or `1` set it, anything else leaves it unset
fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1")
    )
}
