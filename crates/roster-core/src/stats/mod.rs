//! Statistics types and the pure categorization rules behind them

mod age;
mod gender;
mod report;

pub use age::{AgeBucket, AgeBucketStat};
pub use gender::{infer_gender, Gender};
pub use report::{
    AgeSummary, FilterOptions, GenderCount, GroupCount, LeadershipCount, LeadershipRole,
    OptionField, StatisticsReport, BIRTHPLACE_OPTION_LIMIT, FACTION_PLACEHOLDER, NO_FACTION_LABEL,
    RECENT_MEMBER_LIMIT, TOP_POSITION_LIMIT, TOP_PROVINCE_LIMIT,
};
