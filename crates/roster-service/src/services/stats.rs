//! Statistics service
//!
//! Builds the composite report from independent aggregate queries. The
//! queries run concurrently; a failed section is logged and left empty while
//! the rest of the report is still returned.

use std::fmt::Display;

use roster_core::stats::{
    infer_gender, Gender, GenderCount, StatisticsReport, RECENT_MEMBER_LIMIT, TOP_POSITION_LIMIT,
    TOP_PROVINCE_LIMIT,
};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;

/// Statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute the full statistics report
    #[instrument(skip(self))]
    pub async fn get_stats(&self) -> StatisticsReport {
        let repo = self.ctx.member_repo();

        let (total, factions, provinces, positions, ages, names, leadership, summary, recent) = tokio::join!(
            repo.count_all(),
            repo.count_by_faction(),
            repo.top_provinces(TOP_PROVINCE_LIMIT),
            repo.top_positions(TOP_POSITION_LIMIT),
            repo.age_histogram(),
            repo.member_names(),
            repo.leadership_counts(),
            repo.age_summary(),
            repo.recent_members(RECENT_MEMBER_LIMIT),
        );

        let report = StatisticsReport {
            total_members: settle("total_members", total),
            by_faction: settle("by_faction", factions),
            by_province: settle("by_province", provinces),
            by_position: settle("by_position", positions),
            age_groups: settle("age_groups", ages),
            gender: settle("gender", names.map(|names| gender_counts(&names))),
            leadership: settle("leadership", leadership),
            age_summary: settle("age_summary", summary),
            recent_members: settle("recent_members", recent),
        };

        debug!(total = report.total_members, "Statistics computed");
        report
    }
}

/// Unwrap a section, falling back to its empty value on failure
fn settle<T: Default, E: Display>(section: &'static str, result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        warn!(section, error = %e, "Statistics section failed; returning it empty");
        T::default()
    })
}

/// Tally inferred genders over all names, in `Gender::ORDER`
pub fn gender_counts(names: &[Option<String>]) -> Vec<GenderCount> {
    let mut counts = [0i64; 3];
    for name in names {
        let gender = name.as_deref().map_or(Gender::Unknown, infer_gender);
        let idx = Gender::ORDER
            .iter()
            .position(|g| *g == gender)
            .unwrap_or(Gender::ORDER.len() - 1);
        counts[idx] += 1;
    }

    Gender::ORDER
        .into_iter()
        .zip(counts)
        .map(|(gender, count)| GenderCount { gender, count })
        .collect()
}
