//! # roster-db
//!
//! Database layer implementing the member repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL implementation of the repository trait
//! defined in `roster-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Filter clause construction with bound parameters
//! - The repository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::pool::{create_pool, DatabaseConfig};
//! use roster_db::PgMemberRepository;
//! use roster_core::MemberRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         ..DatabaseConfig::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     let repo = PgMemberRepository::new(pool);
//!
//!     let total = repo.count_all().await?;
//!     Ok(())
//! }
//! ```

pub mod filter;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use filter::{FilterClause, SqlParam};
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::PgMemberRepository;
