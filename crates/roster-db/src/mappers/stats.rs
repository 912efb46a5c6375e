//! Aggregate model -> domain mappers

use roster_core::stats::{AgeBucket, AgeBucketStat, AgeSummary, GroupCount, LeadershipCount, LeadershipRole};

use crate::models::{AgeBucketModel, AgeSummaryModel, GroupCountModel, LeadershipModel};

impl From<GroupCountModel> for GroupCount {
    fn from(model: GroupCountModel) -> Self {
        GroupCount::new(model.label, model.member_count)
    }
}

impl From<AgeSummaryModel> for AgeSummary {
    fn from(model: AgeSummaryModel) -> Self {
        AgeSummary {
            average: model.average_age,
            min: model.min_age,
            max: model.max_age,
        }
    }
}

/// Map a histogram row, `None` when the label is not a known bucket
pub fn try_age_bucket(model: AgeBucketModel) -> Option<AgeBucketStat> {
    let bucket = AgeBucket::from_label(&model.bucket)?;
    Some(AgeBucketStat {
        bucket,
        count: model.member_count,
        average_age: match bucket {
            AgeBucket::Unknown => None,
            _ => model.average_age,
        },
    })
}

/// Map a leadership row, `None` when the label is not a known role
pub fn try_leadership(model: LeadershipModel) -> Option<LeadershipCount> {
    let role = LeadershipRole::from_label(&model.role)?;
    Some(LeadershipCount {
        role,
        count: model.member_count,
    })
}
