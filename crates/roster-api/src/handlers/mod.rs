//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod export;
pub mod filters;
pub mod health;
pub mod members;
pub mod stats;
