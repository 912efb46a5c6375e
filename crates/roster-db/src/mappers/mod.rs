//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.
//! Rows whose labels do not name a known bucket or role are dropped by the
//! `try_*` helpers rather than failing the whole aggregate.

mod member;
mod stats;

pub use stats::{try_age_bucket, try_leadership};
