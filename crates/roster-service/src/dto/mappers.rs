//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain types to response DTOs.

use roster_core::entities::{MemberRecord, RecentMember};
use roster_core::stats::{
    AgeBucketStat, AgeSummary, FilterOptions, GenderCount, GroupCount, LeadershipRole,
    StatisticsReport,
};
use roster_core::value_objects::PaginationMeta;

use super::responses::{
    AgeGroupResponse, AgeSummaryResponse, FilterOptionsResponse, GenderCountResponse,
    GroupCountResponse, LeadershipResponse, MemberResponse, PaginationResponse,
    RecentMemberResponse, StatsResponse,
};

// ============================================================================
// Member Mappers
// ============================================================================

impl From<&MemberRecord> for MemberResponse {
    fn from(member: &MemberRecord) -> Self {
        Self::from(member.clone())
    }
}

impl From<MemberRecord> for MemberResponse {
    fn from(member: MemberRecord) -> Self {
        Self {
            id: member.id,
            province_id: member.province_id,
            name: member.name,
            birthplace: member.birthplace,
            birth_date: member.birth_date,
            position: member.position,
            faction: member.faction,
            address: member.address,
            remarks: member.remarks,
            age: member.age,
            province: member.province,
            is_chair: member.is_chair,
            is_vice_chair: member.is_vice_chair,
            created_at: member.created_at,
        }
    }
}

impl From<PaginationMeta> for PaginationResponse {
    fn from(meta: PaginationMeta) -> Self {
        Self {
            current_page: meta.current_page,
            total_pages: meta.total_pages,
            total_items: meta.total_items,
            page_size: meta.page_size,
            has_next: meta.has_next,
            has_prev: meta.has_prev,
        }
    }
}

// ============================================================================
// Statistics Mappers
// ============================================================================

impl From<GroupCount> for GroupCountResponse {
    fn from(group: GroupCount) -> Self {
        Self {
            name: group.label,
            count: group.count,
        }
    }
}

impl From<AgeBucketStat> for AgeGroupResponse {
    fn from(stat: AgeBucketStat) -> Self {
        Self {
            age_group: stat.bucket.label().to_string(),
            count: stat.count,
            average_age: stat.average_age,
        }
    }
}

impl From<GenderCount> for GenderCountResponse {
    fn from(count: GenderCount) -> Self {
        Self {
            gender: count.gender.label().to_string(),
            count: count.count,
        }
    }
}

impl From<AgeSummary> for AgeSummaryResponse {
    fn from(summary: AgeSummary) -> Self {
        Self {
            average_age: summary.average,
            min_age: summary.min,
            max_age: summary.max,
        }
    }
}

impl From<RecentMember> for RecentMemberResponse {
    fn from(member: RecentMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            faction: member.faction,
            position: member.position,
            province: member.province,
        }
    }
}

impl From<StatisticsReport> for StatsResponse {
    fn from(report: StatisticsReport) -> Self {
        let leadership = (!report.leadership.is_empty()).then(|| LeadershipResponse {
            chair: report.leadership_count(LeadershipRole::Chair),
            vice_chair: report.leadership_count(LeadershipRole::ViceChair),
            member: report.leadership_count(LeadershipRole::Member),
        });

        Self {
            total_members: report.total_members,
            by_faction: report.by_faction.into_iter().map(Into::into).collect(),
            by_province: report.by_province.into_iter().map(Into::into).collect(),
            by_position: report.by_position.into_iter().map(Into::into).collect(),
            age_groups: report.age_groups.into_iter().map(Into::into).collect(),
            gender: report.gender.into_iter().map(Into::into).collect(),
            leadership,
            age_summary: report.age_summary.into(),
            recent_members: report.recent_members.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<FilterOptions> for FilterOptionsResponse {
    fn from(options: FilterOptions) -> Self {
        Self {
            factions: options.factions,
            provinces: options.provinces,
            positions: options.positions,
            birthplaces: options.birthplaces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::stats::{AgeBucket, Gender, LeadershipCount};
    use roster_core::value_objects::PageRequest;

    #[test]
    fn test_member_response_is_camel_case() {
        let mut member = MemberRecord::new(12, "Budi");
        member.province_id = Some(32);
        member.is_vice_chair = true;

        let json = serde_json::to_value(MemberResponse::from(&member)).unwrap();

        assert_eq!(json["id"], 12);
        assert_eq!(json["provinceId"], 32);
        assert_eq!(json["name"], "Budi");
        assert_eq!(json["isViceChair"], true);
        assert!(json["birthDate"].is_null());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_pagination_mapping() {
        let meta = PaginationMeta::new(PageRequest::with_size(1, 25), 53);
        let response = PaginationResponse::from(meta);

        assert_eq!(response.total_pages, 3);
        assert!(response.has_next);
        assert!(!response.has_prev);
    }

    #[test]
    fn test_stats_mapping() {
        let report = StatisticsReport {
            total_members: 100,
            by_faction: vec![GroupCount::new("No Faction", 3)],
            age_groups: vec![AgeBucketStat {
                bucket: AgeBucket::Unknown,
                count: 4,
                average_age: None,
            }],
            gender: vec![GenderCount {
                gender: Gender::Female,
                count: 10,
            }],
            leadership: vec![
                LeadershipCount { role: LeadershipRole::Chair, count: 2 },
                LeadershipCount { role: LeadershipRole::ViceChair, count: 3 },
                LeadershipCount { role: LeadershipRole::Member, count: 95 },
            ],
            ..Default::default()
        };

        let response = StatsResponse::from(report);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["totalMembers"], 100);
        assert_eq!(json["byFaction"][0]["name"], "No Faction");
        assert_eq!(json["ageGroups"][0]["ageGroup"], "unknown");
        assert!(json["ageGroups"][0]["averageAge"].is_null());
        assert_eq!(json["gender"][0]["gender"], "female");
        assert_eq!(json["leadership"]["viceChair"], 3);
        assert_eq!(json["leadership"]["member"], 95);
        assert!(json["ageSummary"]["averageAge"].is_null());
    }

    #[test]
    fn test_missing_leadership_is_null() {
        let response = StatsResponse::from(StatisticsReport::default());
        assert!(response.leadership.is_none());
        assert!(response.recent_members.is_empty());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["leadership"].is_null());
    }

    #[test]
    fn test_zero_leadership_counts_are_kept() {
        let report = StatisticsReport {
            leadership: LeadershipRole::ORDER
                .into_iter()
                .map(|role| LeadershipCount { role, count: 0 })
                .collect(),
            ..Default::default()
        };

        let response = StatsResponse::from(report);
        assert_eq!(response.leadership, Some(LeadershipResponse::default()));
    }
}
