//! Structured search filters

/// Optional constraints narrowing a search
///
/// Text filters are "contains" matches; the age bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub faction: Option<String>,
    pub province: Option<String>,
    pub position: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub chair_only: bool,
    pub vice_chair_only: bool,
}

impl SearchFilters {
    /// Trim text filters and drop the ones left empty
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            faction: normalize_text(self.faction),
            province: normalize_text(self.province),
            position: normalize_text(self.position),
            ..self
        }
    }

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.faction.is_none()
            && self.province.is_none()
            && self.position.is_none()
            && self.min_age.is_none()
            && self.max_age.is_none()
            && !self.chair_only
            && !self.vice_chair_only
    }

    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_age_range(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.min_age = min;
        self.max_age = max;
        self
    }

    pub fn chair_only(mut self) -> Self {
        self.chair_only = true;
        self
    }

    pub fn vice_chair_only(mut self) -> Self {
        self.vice_chair_only = true;
        self
    }
}

fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim the free-text query; an empty result means "no text filter"
pub fn normalize_query(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
