//! # roster-core
//!
//! Domain layer containing the member record entity, query value objects,
//! statistics types, and the repository trait.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod stats;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{MemberRecord, RecentMember};
pub use error::DomainError;
pub use stats::{
    infer_gender, AgeBucket, AgeBucketStat, AgeSummary, FilterOptions, Gender, GenderCount,
    GroupCount, LeadershipCount, LeadershipRole, OptionField, StatisticsReport,
};
pub use traits::{MemberRepository, RepoResult};
pub use value_objects::{
    PageRequest, PaginationMeta, SearchFilters, SortDirection, SortField, SortSpec,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
