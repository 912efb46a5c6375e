//! Member record entity - one row per legislator

use chrono::{DateTime, Utc};

/// A legislator as stored in the directory
///
/// Records are read-only from this system's point of view: ingestion happens
/// upstream and `id` is never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
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

impl MemberRecord {
    /// Create a record with only an id and a name set
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            province_id: None,
            name: Some(name.into()),
            birthplace: None,
            birth_date: None,
            position: None,
            faction: None,
            address: None,
            remarks: None,
            age: None,
            province: None,
            is_chair: false,
            is_vice_chair: false,
            created_at: Utc::now(),
        }
    }

    /// An ordinary member holds neither leadership flag
    #[inline]
    pub fn is_ordinary(&self) -> bool {
        !self.is_chair && !self.is_vice_chair
    }

    /// Name or an empty string when unknown
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Projection of a recently ingested record used by the statistics report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentMember {
    pub id: i64,
    pub name: Option<String>,
    pub faction: Option<String>,
    pub position: Option<String>,
    pub province: Option<String>,
}

impl From<&MemberRecord> for RecentMember {
    fn from(record: &MemberRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            faction: record.faction.clone(),
            position: record.position.clone(),
            province: record.province.clone(),
        }
    }
}
