//! Repository implementations
//!
//! PostgreSQL implementation of the repository trait defined in roster-core.

mod error;
mod member;

pub use member::PgMemberRepository;
