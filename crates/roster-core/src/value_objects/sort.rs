//! Sort field whitelist and direction normalization
//!
//! Column names in an ORDER BY clause cannot be bound as parameters, so the
//! requested field is resolved against a closed set and only the set's own
//! column names ever reach the query text.

use std::fmt;

/// Sortable member fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    Name,
    Faction,
    Position,
    Age,
    Birthplace,
    Province,
    CreatedAt,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        Self::Name,
        Self::Faction,
        Self::Position,
        Self::Age,
        Self::Birthplace,
        Self::Province,
        Self::CreatedAt,
    ];

    /// Resolve a requested field name; anything outside the whitelist is `Name`
    pub fn from_param(value: Option<&str>) -> Self {
        value
            .and_then(|v| Self::ALL.into_iter().find(|f| f.as_str() == v.trim()))
            .unwrap_or_default()
    }

    /// Field name as exposed to clients
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Faction => "faction",
            Self::Position => "position",
            Self::Age => "age",
            Self::Birthplace => "birthplace",
            Self::Province => "province",
            Self::CreatedAt => "createdAt",
        }
    }

    /// Column name in the `members` table
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Faction => "faction",
            Self::Position => "position",
            Self::Age => "age",
            Self::Birthplace => "birthplace",
            Self::Province => "province",
            Self::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc` in any case is descending, everything else ascending
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Resolved ordering for a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Resolve raw request parameters
    pub fn from_params(field: Option<&str>, direction: Option<&str>) -> Self {
        Self {
            field: SortField::from_param(field),
            direction: SortDirection::from_param(direction),
        }
    }

    /// ORDER BY body; `id` breaks ties so pages never overlap
    pub fn order_by(&self) -> String {
        format!(
            "{} {}, id ASC",
            self.field.column(),
            self.direction.as_sql()
        )
    }
}
