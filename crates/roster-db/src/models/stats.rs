//! Aggregate row models

use sqlx::FromRow;

/// `label, member_count` rows from GROUP BY queries
#[derive(Debug, Clone, FromRow)]
pub struct GroupCountModel {
    pub label: String,
    pub member_count: i64,
}

/// One age histogram bucket
#[derive(Debug, Clone, FromRow)]
pub struct AgeBucketModel {
    pub bucket: String,
    pub member_count: i64,
    pub average_age: Option<f64>,
}

/// One leadership role count
#[derive(Debug, Clone, FromRow)]
pub struct LeadershipModel {
    pub role: String,
    pub member_count: i64,
}

/// Global AVG/MIN/MAX over known ages
#[derive(Debug, Clone, FromRow)]
pub struct AgeSummaryModel {
    pub average_age: Option<f64>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}
