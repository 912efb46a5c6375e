//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain types to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{MemberQuery, MAX_QUERY_LENGTH};

pub use responses::{
    AgeGroupResponse, AgeSummaryResponse, ApiResponse, CountResponse, FilterOptionsResponse,
    GenderCountResponse, GroupCountResponse, HealthChecks, HealthResponse, LeadershipResponse,
    MemberResponse, PaginatedResponse, PaginationResponse, ReadinessResponse,
    RecentMemberResponse, StatsResponse,
};
