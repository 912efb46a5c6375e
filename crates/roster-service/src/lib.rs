//! # roster-service
//!
//! Application layer containing the directory use cases and DTOs.
//!
//! Services borrow a [`ServiceContext`] and are cheap to construct per request:
//!
//! ```rust,ignore
//! let report = StatsService::new(&ctx).get_stats().await;
//! let page = SearchService::new(&ctx).search(Some("ahmad"), SearchOptions::default()).await?;
//! ```

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::*;
