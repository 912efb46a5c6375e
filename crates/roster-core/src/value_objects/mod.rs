//! Value objects - immutable types describing a directory query

mod filters;
mod page;
mod sort;

pub use filters::{normalize_query, SearchFilters};
pub use page::{PageRequest, PaginationMeta, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use sort::{SortDirection, SortField, SortSpec};
