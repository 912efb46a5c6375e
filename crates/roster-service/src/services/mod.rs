//! Business logic services
//!
//! Each service is a thin, stateless wrapper over the member repository held
//! by the [`ServiceContext`].

pub mod context;
pub mod error;
pub mod export;
pub mod filter_options;
pub mod search;
pub mod stats;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use export::{ExportService, CSV_CONTENT_TYPE, CSV_FILENAME, CSV_HEADER};
pub use filter_options::FilterOptionService;
pub use search::{SearchOptions, SearchResult, SearchService};
pub use stats::StatsService;
