//! Composite statistics report and filter option lists

use std::fmt;

use crate::entities::RecentMember;

use super::age::AgeBucketStat;
use super::gender::Gender;

/// Bucket label for members without a faction
pub const NO_FACTION_LABEL: &str = "No Faction";
/// Placeholder some sources use for "no faction"
pub const FACTION_PLACEHOLDER: &str = "-";
pub const TOP_PROVINCE_LIMIT: i64 = 15;
pub const TOP_POSITION_LIMIT: i64 = 10;
pub const RECENT_MEMBER_LIMIT: i64 = 5;
pub const BIRTHPLACE_OPTION_LIMIT: i64 = 100;

/// A labelled count from a GROUP BY
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub label: String,
    pub count: i64,
}

impl GroupCount {
    pub fn new(label: impl Into<String>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderCount {
    pub gender: Gender,
    pub count: i64,
}

/// Non-overlapping leadership categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadershipRole {
    Chair,
    /// Vice-chair and not chair
    ViceChair,
    /// Neither flag set
    Member,
}

impl LeadershipRole {
    pub const ORDER: [LeadershipRole; 3] = [Self::Chair, Self::ViceChair, Self::Member];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Chair => "chair",
            Self::ViceChair => "vice_chair",
            Self::Member => "member",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|r| r.label() == label)
    }
}

impl fmt::Display for LeadershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadershipCount {
    pub role: LeadershipRole,
    pub count: i64,
}

/// Mean, min and max over members with a known age
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AgeSummary {
    pub average: Option<f64>,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

/// Everything `get_stats` returns
///
/// Each field is computed independently. A field whose query failed holds
/// its `Default` value instead of failing the whole report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatisticsReport {
    pub total_members: i64,
    pub by_faction: Vec<GroupCount>,
    pub by_province: Vec<GroupCount>,
    pub by_position: Vec<GroupCount>,
    pub age_groups: Vec<AgeBucketStat>,
    pub gender: Vec<GenderCount>,
    pub leadership: Vec<LeadershipCount>,
    pub age_summary: AgeSummary,
    pub recent_members: Vec<RecentMember>,
}

impl StatisticsReport {
    /// Sum of the leadership categories
    pub fn leadership_total(&self) -> i64 {
        self.leadership.iter().map(|c| c.count).sum()
    }

    pub fn leadership_count(&self, role: LeadershipRole) -> i64 {
        self.leadership
            .iter()
            .find(|c| c.role == role)
            .map_or(0, |c| c.count)
    }
}

/// Fields with a distinct-value option list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    Faction,
    Province,
    Position,
    Birthplace,
}

impl OptionField {
    pub const ALL: [OptionField; 4] = [
        Self::Faction,
        Self::Province,
        Self::Position,
        Self::Birthplace,
    ];

    /// Column name in the `members` table
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Faction => "faction",
            Self::Province => "province",
            Self::Position => "position",
            Self::Birthplace => "birthplace",
        }
    }

    /// Row cap for the option list, if any
    pub const fn limit(&self) -> Option<i64> {
        match self {
            Self::Birthplace => Some(BIRTHPLACE_OPTION_LIMIT),
            _ => None,
        }
    }

    /// Whether the faction placeholder must be filtered out as well
    pub const fn excludes_placeholder(&self) -> bool {
        matches!(self, Self::Faction)
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Distinct values clients may offer as filter choices
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub factions: Vec<String>,
    pub provinces: Vec<String>,
    pub positions: Vec<String>,
    pub birthplaces: Vec<String>,
}
