//! In-memory member repository for service and router tests
//!
//! Compiled for this crate's own tests and, through the `test-support`
//! feature, for the API crate's router tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use roster_core::entities::{MemberRecord, RecentMember};
use roster_core::stats::{
    AgeBucket, AgeBucketStat, AgeSummary, GroupCount, LeadershipCount, LeadershipRole, OptionField,
    FACTION_PLACEHOLDER, NO_FACTION_LABEL,
};
use roster_core::traits::{MemberRepository, RepoResult};
use roster_core::value_objects::{normalize_query, PageRequest, SearchFilters, SortSpec};
use roster_core::DomainError;

use super::context::ServiceContext;

/// Repository over a fixed set of records; named operations can be made to fail
#[derive(Debug, Default)]
pub struct FakeRepository {
    members: Vec<MemberRecord>,
    failing: Vec<&'static str>,
}

impl FakeRepository {
    pub fn with_members(members: Vec<MemberRecord>) -> Self {
        Self {
            members,
            failing: Vec::new(),
        }
    }

    /// Make the named trait method return a database error
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.push(operation);
        self
    }

    pub fn into_context(self) -> ServiceContext {
        ServiceContext::new(None, Arc::new(self))
    }

    fn check(&self, operation: &'static str) -> RepoResult<()> {
        if self.failing.contains(&operation) {
            Err(DomainError::DatabaseError(format!("{operation} failed")))
        } else {
            Ok(())
        }
    }

    fn matching(&self, query: Option<&str>, filters: &SearchFilters) -> Vec<&MemberRecord> {
        let filters = filters.clone().normalized();
        let query = query.and_then(normalize_query).map(str::to_lowercase);

        self.members
            .iter()
            .filter(|m| {
                query.as_deref().map_or(true, |q| {
                    [&m.name, &m.faction, &m.position, &m.birthplace, &m.province, &m.address]
                        .iter()
                        .any(|field| contains(field, q))
                })
            })
            .filter(|m| filters.faction.as_deref().map_or(true, |f| contains(&m.faction, f)))
            .filter(|m| filters.province.as_deref().map_or(true, |p| contains(&m.province, p)))
            .filter(|m| filters.position.as_deref().map_or(true, |p| contains(&m.position, p)))
            .filter(|m| filters.min_age.map_or(true, |min| m.age.is_some_and(|a| a >= min)))
            .filter(|m| filters.max_age.map_or(true, |max| m.age.is_some_and(|a| a <= max)))
            .filter(|m| !filters.chair_only || m.is_chair)
            .filter(|m| !filters.vice_chair_only || m.is_vice_chair)
            .collect()
    }

    fn top(&self, field: fn(&MemberRecord) -> &Option<String>, limit: i64) -> Vec<GroupCount> {
        let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
        for value in self.members.iter().filter_map(|m| field(m).as_deref()) {
            if !value.trim().is_empty() {
                *counts.entry(value).or_default() += 1;
            }
        }
        let mut groups: Vec<GroupCount> = counts
            .into_iter()
            .map(|(label, count)| GroupCount::new(label, count))
            .collect();
        groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
        groups.truncate(limit as usize);
        groups
    }
}

/// Histogram over raw ages in report order, empty buckets skipped
fn tally_ages(ages: impl IntoIterator<Item = Option<i32>>) -> Vec<AgeBucketStat> {
    let mut totals: BTreeMap<AgeBucket, (i64, i64)> = BTreeMap::new();
    for age in ages {
        let entry = totals.entry(AgeBucket::from_age(age)).or_default();
        entry.0 += 1;
        entry.1 += i64::from(age.unwrap_or(0));
    }

    totals
        .into_iter()
        .map(|(bucket, (count, sum))| AgeBucketStat {
            bucket,
            count,
            average_age: (bucket != AgeBucket::Unknown).then(|| sum as f64 / count as f64),
        })
        .collect()
}

fn contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|v| v.to_lowercase().contains(&needle.to_lowercase()))
}

#[async_trait]
impl MemberRepository for FakeRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MemberRecord>> {
        self.check("find_by_id")?;
        Ok(self.members.iter().find(|m| m.id == id).cloned())
    }

    async fn search(
        &self,
        query: Option<&str>,
        filters: &SearchFilters,
        _sort: SortSpec,
        page: PageRequest,
    ) -> RepoResult<Vec<MemberRecord>> {
        self.check("search")?;
        let mut rows = self.matching(query, filters);
        rows.sort_by(|a, b| a.display_name().cmp(b.display_name()).then(a.id.cmp(&b.id)));
        Ok(rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, query: Option<&str>, filters: &SearchFilters) -> RepoResult<i64> {
        self.check("count")?;
        Ok(self.matching(query, filters).len() as i64)
    }

    async fn find_all(&self) -> RepoResult<Vec<MemberRecord>> {
        self.check("find_all")?;
        let mut all = self.members.clone();
        all.sort_by_key(|m| m.id);
        Ok(all)
    }

    async fn count_all(&self) -> RepoResult<i64> {
        self.check("count_all")?;
        Ok(self.members.len() as i64)
    }

    async fn count_by_faction(&self) -> RepoResult<Vec<GroupCount>> {
        self.check("count_by_faction")?;
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for member in &self.members {
            let label = match member.faction.as_deref().map(str::trim) {
                None | Some("") => NO_FACTION_LABEL,
                Some(f) if f == FACTION_PLACEHOLDER => NO_FACTION_LABEL,
                Some(f) => f,
            };
            *counts.entry(label.to_string()).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(label, count)| GroupCount::new(label, count))
            .collect())
    }

    async fn top_provinces(&self, limit: i64) -> RepoResult<Vec<GroupCount>> {
        self.check("top_provinces")?;
        Ok(self.top(|m| &m.province, limit))
    }

    async fn top_positions(&self, limit: i64) -> RepoResult<Vec<GroupCount>> {
        self.check("top_positions")?;
        Ok(self.top(|m| &m.position, limit))
    }

    async fn age_histogram(&self) -> RepoResult<Vec<AgeBucketStat>> {
        self.check("age_histogram")?;
        Ok(tally_ages(self.members.iter().map(|m| m.age)))
    }

    async fn member_names(&self) -> RepoResult<Vec<Option<String>>> {
        self.check("member_names")?;
        Ok(self.members.iter().map(|m| m.name.clone()).collect())
    }

    async fn leadership_counts(&self) -> RepoResult<Vec<LeadershipCount>> {
        self.check("leadership_counts")?;
        let count = |pred: fn(&MemberRecord) -> bool| {
            self.members.iter().filter(|m| pred(m)).count() as i64
        };
        Ok(vec![
            LeadershipCount {
                role: LeadershipRole::Chair,
                count: count(|m| m.is_chair),
            },
            LeadershipCount {
                role: LeadershipRole::ViceChair,
                count: count(|m| m.is_vice_chair && !m.is_chair),
            },
            LeadershipCount {
                role: LeadershipRole::Member,
                count: count(MemberRecord::is_ordinary),
            },
        ])
    }

    async fn age_summary(&self) -> RepoResult<AgeSummary> {
        self.check("age_summary")?;
        let ages: Vec<i32> = self.members.iter().filter_map(|m| m.age).collect();
        if ages.is_empty() {
            return Ok(AgeSummary::default());
        }
        let sum: i64 = ages.iter().map(|a| i64::from(*a)).sum();
        Ok(AgeSummary {
            average: Some(sum as f64 / ages.len() as f64),
            min: ages.iter().min().copied(),
            max: ages.iter().max().copied(),
        })
    }

    async fn recent_members(&self, limit: i64) -> RepoResult<Vec<RecentMember>> {
        self.check("recent_members")?;
        let mut all: Vec<&MemberRecord> = self.members.iter().collect();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all
            .into_iter()
            .take(limit as usize)
            .map(RecentMember::from)
            .collect())
    }

    async fn distinct_values(&self, field: OptionField) -> RepoResult<Vec<String>> {
        self.check("distinct_values")?;
        let values: BTreeSet<String> = self
            .members
            .iter()
            .filter_map(|m| match field {
                OptionField::Faction => m.faction.clone(),
                OptionField::Province => m.province.clone(),
                OptionField::Position => m.position.clone(),
                OptionField::Birthplace => m.birthplace.clone(),
            })
            .filter(|v| !v.trim().is_empty())
            .filter(|v| !(field.excludes_placeholder() && v.trim() == FACTION_PLACEHOLDER))
            .collect();

        let mut values: Vec<String> = values.into_iter().collect();
        if let Some(limit) = field.limit() {
            values.truncate(limit as usize);
        }
        Ok(values)
    }
}

/// Small fixed roster used across service tests
pub fn sample_members() -> Vec<MemberRecord> {
    let mut budi = MemberRecord::new(1, "Budi Santoso");
    budi.faction = Some("Golkar".to_string());
    budi.province = Some("Jawa Barat".to_string());
    budi.position = Some("Ketua".to_string());
    budi.birthplace = Some("Bandung".to_string());
    budi.age = Some(58);
    budi.is_chair = true;

    let mut siti = MemberRecord::new(2, "Siti Aminah");
    siti.faction = Some("Fraksi Ahmad Dahlan".to_string());
    siti.province = Some("Jawa Barat".to_string());
    siti.position = Some("Anggota".to_string());
    siti.birthplace = Some("Bogor".to_string());
    siti.age = Some(29);

    let mut ahmad = MemberRecord::new(3, "H. Ahmad Yani");
    ahmad.faction = Some("-".to_string());
    ahmad.province = Some("Bali".to_string());
    ahmad.position = Some("Anggota".to_string());
    ahmad.age = Some(40);
    ahmad.is_vice_chair = true;

    let dewi = MemberRecord::new(4, "Dewi \"Ibu\" Lestari");

    vec![budi, siti, ahmad, dewi]
}
