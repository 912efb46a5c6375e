//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub province_id: Option<i32>,
    pub name: Option<String>,
    pub birthplace: Option<String>,
    pub birth_date: Option<String>,
    pub position: Option<String>,
    pub faction: Option<String>,
    pub address: Option<String>,
    pub remarks: Option<String>,
    pub age: Option<i32>,
    pub province: Option<String>,
    pub is_chair: bool,
    pub is_vice_chair: bool,
    pub created_at: DateTime<Utc>,
}

/// Narrow projection used by the "recently added" list
#[derive(Debug, Clone, FromRow)]
pub struct RecentMemberModel {
    pub id: i64,
    pub name: Option<String>,
    pub faction: Option<String>,
    pub position: Option<String>,
    pub province: Option<String>,
}
