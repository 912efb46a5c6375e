//! Search service
//!
//! Free-text search with structured filters, sorting and offset pagination.

use roster_core::entities::MemberRecord;
use roster_core::value_objects::{normalize_query, PageRequest, PaginationMeta, SearchFilters, SortSpec};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Everything besides the query text that shapes a search
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub filters: SearchFilters,
    pub sort: SortSpec,
    pub page: PageRequest,
}

/// One page of matches plus the metadata to navigate the rest
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub rows: Vec<MemberRecord>,
    pub pagination: PaginationMeta,
}

/// Search service
pub struct SearchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SearchService<'a> {
    /// Create a new SearchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch one page of matching members with pagination metadata
    ///
    /// The row fetch and the count run concurrently and share the same
    /// predicate; they are not wrapped in a transaction.
    #[instrument(skip(self, options))]
    pub async fn search(
        &self,
        query: Option<&str>,
        options: SearchOptions,
    ) -> ServiceResult<SearchResult> {
        let query = query.and_then(normalize_query);
        let repo = self.ctx.member_repo();

        let (rows, total) = tokio::join!(
            repo.search(query, &options.filters, options.sort, options.page),
            repo.count(query, &options.filters),
        );
        let rows = rows?;
        let total = total?;

        let pagination = PaginationMeta::new(options.page, total);
        debug!(
            returned = rows.len(),
            total,
            page = pagination.current_page,
            "Search completed"
        );

        Ok(SearchResult { rows, pagination })
    }

    /// Number of members matching the query and filters
    #[instrument(skip(self, filters))]
    pub async fn count(&self, query: Option<&str>, filters: &SearchFilters) -> ServiceResult<i64> {
        let query = query.and_then(normalize_query);
        Ok(self.ctx.member_repo().count(query, filters).await?)
    }

    /// Look up one member; absence is not an error
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Option<MemberRecord>> {
        Ok(self.ctx.member_repo().find_by_id(id).await?)
    }
}
