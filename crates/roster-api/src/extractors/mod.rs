//! Axum extractors for request handling
//!
//! Custom extractors for query validation and path parsing.

mod path;
mod validated;

pub use path::MemberIdPath;
pub use validated::ValidatedQuery;
