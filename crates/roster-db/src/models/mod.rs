//! Database models - SQLx-compatible structs for the members table and its aggregates

mod member;
mod stats;

pub use member::{MemberModel, RecentMemberModel};
pub use stats::{AgeBucketModel, AgeSummaryModel, GroupCountModel, LeadershipModel};
