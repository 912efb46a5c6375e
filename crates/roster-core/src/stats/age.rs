//! Age histogram buckets
//!
//! Thresholds are fixed: under 30, 30-40, 41-50, 51-60, over 60, plus an
//! `unknown` bucket for records without an age.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeBucket {
    Under30,
    From30To40,
    From41To50,
    From51To60,
    Over60,
    Unknown,
}

impl AgeBucket {
    /// Report order
    pub const ORDER: [AgeBucket; 6] = [
        Self::Under30,
        Self::From30To40,
        Self::From41To50,
        Self::From51To60,
        Self::Over60,
        Self::Unknown,
    ];

    /// Oldest age that still falls in this bucket; `None` for the
    /// open-ended and unknown buckets
    pub const fn max_age(&self) -> Option<i32> {
        match self {
            Self::Under30 => Some(29),
            Self::From30To40 => Some(40),
            Self::From41To50 => Some(50),
            Self::From51To60 => Some(60),
            Self::Over60 | Self::Unknown => None,
        }
    }

    /// Bounded buckets in ascending order of `max_age`
    pub fn bounded() -> impl Iterator<Item = (AgeBucket, i32)> {
        Self::ORDER
            .into_iter()
            .filter_map(|b| b.max_age().map(|max| (b, max)))
    }

    pub fn from_age(age: Option<i32>) -> Self {
        let Some(age) = age else {
            return Self::Unknown;
        };
        Self::bounded()
            .find(|(_, max)| age <= *max)
            .map_or(Self::Over60, |(bucket, _)| bucket)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Under30 => "under 30",
            Self::From30To40 => "30-40",
            Self::From41To50 => "41-50",
            Self::From51To60 => "51-60",
            Self::Over60 => "over 60",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|b| b.label() == label)
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Member count and mean age within one bucket
#[derive(Debug, Clone, PartialEq)]
pub struct AgeBucketStat {
    pub bucket: AgeBucket,
    pub count: i64,
    /// `None` for the unknown bucket
    pub average_age: Option<f64>,
}

impl AgeBucketStat {
    /// Restore report order after rows arrive from the store
    pub fn sort_in_report_order(stats: &mut [AgeBucketStat]) {
        stats.sort_by_key(|s| s.bucket);
    }
}
