//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method is a single read-only query.

use async_trait::async_trait;

use crate::entities::{MemberRecord, RecentMember};
use crate::error::DomainError;
use crate::stats::{AgeBucketStat, AgeSummary, GroupCount, LeadershipCount, OptionField};
use crate::value_objects::{PageRequest, SearchFilters, SortSpec};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    // --- lookup & search -----------------------------------------------------

    /// Find a member by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MemberRecord>>;

    /// One page of members matching the query text and filters
    async fn search(
        &self,
        query: Option<&str>,
        filters: &SearchFilters,
        sort: SortSpec,
        page: PageRequest,
    ) -> RepoResult<Vec<MemberRecord>>;

    /// Number of members matching the query text and filters
    ///
    /// Must apply exactly the predicate `search` applies.
    async fn count(&self, query: Option<&str>, filters: &SearchFilters) -> RepoResult<i64>;

    /// Every member ordered by ID ascending
    async fn find_all(&self) -> RepoResult<Vec<MemberRecord>>;

    // --- aggregates ----------------------------------------------------------

    /// Total number of members
    async fn count_all(&self) -> RepoResult<i64>;

    /// Counts per faction, empty and placeholder factions collapsed into one bucket
    async fn count_by_faction(&self) -> RepoResult<Vec<GroupCount>>;

    /// Provinces with the most members
    async fn top_provinces(&self, limit: i64) -> RepoResult<Vec<GroupCount>>;

    /// Positions with the most members, empty positions excluded
    async fn top_positions(&self, limit: i64) -> RepoResult<Vec<GroupCount>>;

    /// Age histogram with per-bucket average
    async fn age_histogram(&self) -> RepoResult<Vec<AgeBucketStat>>;

    /// All member names, for the gender heuristic
    async fn member_names(&self) -> RepoResult<Vec<Option<String>>>;

    /// Chair / vice-chair / ordinary member counts
    async fn leadership_counts(&self) -> RepoResult<Vec<LeadershipCount>>;

    /// Average, minimum and maximum known age
    async fn age_summary(&self) -> RepoResult<AgeSummary>;

    /// Most recently ingested members (highest IDs first)
    async fn recent_members(&self, limit: i64) -> RepoResult<Vec<RecentMember>>;

    /// Distinct, alphabetically ordered values of a filterable field
    async fn distinct_values(&self, field: OptionField) -> RepoResult<Vec<String>>;
}
