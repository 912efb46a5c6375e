//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use roster_core::entities::{MemberRecord, RecentMember};
use roster_core::stats::{
    AgeBucket, AgeBucketStat, AgeSummary, GroupCount, LeadershipCount, OptionField,
    FACTION_PLACEHOLDER, NO_FACTION_LABEL,
};
use roster_core::traits::{MemberRepository, RepoResult};
use roster_core::value_objects::{PageRequest, SearchFilters, SortSpec};

use crate::filter::FilterClause;
use crate::mappers::{try_age_bucket, try_leadership};
use crate::models::{
    AgeBucketModel, AgeSummaryModel, GroupCountModel, LeadershipModel, MemberModel,
    RecentMemberModel,
};

use super::error::map_db_error;

const MEMBER_COLUMNS: &str = "id, province_id, name, birthplace, birth_date, position, \
     faction, address, remarks, age, province, is_chair, is_vice_chair, created_at";

/// Histogram query; the `CASE` arms come from the bucket bounds in the core
fn age_histogram_sql() -> String {
    let arms: String = AgeBucket::bounded()
        .map(|(bucket, max)| format!("WHEN age <= {max} THEN '{}' ", bucket.label()))
        .collect();

    format!(
        "SELECT CASE WHEN age IS NULL THEN '{unknown}' {arms}ELSE '{over}' END AS bucket, \
         COUNT(*) AS member_count, AVG(age)::float8 AS average_age \
         FROM members GROUP BY 1",
        unknown = AgeBucket::Unknown.label(),
        over = AgeBucket::Over60.label(),
    )
}

const LEADERSHIP_SQL: &str = r#"
    SELECT 'chair' AS role, COUNT(*) AS member_count
    FROM members WHERE is_chair
    UNION ALL
    SELECT 'vice_chair' AS role, COUNT(*) AS member_count
    FROM members WHERE is_vice_chair AND NOT is_chair
    UNION ALL
    SELECT 'member' AS role, COUNT(*) AS member_count
    FROM members WHERE NOT is_chair AND NOT is_vice_chair
"#;

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Top `limit` values of a text column by member count, blanks excluded
    async fn top_groups(&self, column: &'static str, limit: i64) -> RepoResult<Vec<GroupCount>> {
        let sql = format!(
            r#"
            SELECT {column} AS label, COUNT(*) AS member_count
            FROM members
            WHERE {column} IS NOT NULL AND TRIM({column}) <> ''
            GROUP BY {column}
            ORDER BY member_count DESC, {column} ASC
            LIMIT $1
            "#
        );

        let rows = sqlx::query_as::<_, GroupCountModel>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(GroupCount::from).collect())
    }
}

/// Build the `distinct_values` statement for one option field
///
/// The faction placeholder, when excluded, is bound first; the row cap, when
/// present, takes the next placeholder.
fn distinct_values_sql(field: OptionField) -> String {
    let column = field.column();
    let mut sql = format!(
        "SELECT DISTINCT {column} FROM members \
         WHERE {column} IS NOT NULL AND TRIM({column}) <> ''"
    );
    let mut next = 1;

    if field.excludes_placeholder() {
        sql.push_str(&format!(" AND TRIM({column}) <> ${next}"));
        next += 1;
    }

    sql.push_str(&format!(" ORDER BY {column} ASC"));

    if field.limit().is_some() {
        sql.push_str(&format!(" LIMIT ${next}"));
    }

    sql
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MemberRecord>> {
        let sql = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1");

        let result = sqlx::query_as::<_, MemberModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(MemberRecord::from))
    }

    #[instrument(skip(self, filters))]
    async fn search(
        &self,
        query: Option<&str>,
        filters: &SearchFilters,
        sort: SortSpec,
        page: PageRequest,
    ) -> RepoResult<Vec<MemberRecord>> {
        let clause = FilterClause::from_criteria(query, filters);
        let limit_idx = clause.next_index();
        let sql = format!(
            "SELECT {MEMBER_COLUMNS} FROM members{} ORDER BY {} LIMIT ${} OFFSET ${}",
            clause.where_clause(),
            sort.order_by(),
            limit_idx,
            limit_idx + 1,
        );

        let rows = clause
            .apply_bindings(sqlx::query_as::<_, MemberModel>(&sql))
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(MemberRecord::from).collect())
    }

    #[instrument(skip(self, filters))]
    async fn count(&self, query: Option<&str>, filters: &SearchFilters) -> RepoResult<i64> {
        let clause = FilterClause::from_criteria(query, filters);
        let sql = format!("SELECT COUNT(*) FROM members{}", clause.where_clause());

        let total = clause
            .apply_bindings_scalar(sqlx::query_scalar::<_, i64>(&sql))
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<MemberRecord>> {
        let sql = format!("SELECT {MEMBER_COLUMNS} FROM members ORDER BY id ASC");

        let rows = sqlx::query_as::<_, MemberModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(MemberRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> RepoResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn count_by_faction(&self) -> RepoResult<Vec<GroupCount>> {
        let rows = sqlx::query_as::<_, GroupCountModel>(
            r#"
            SELECT label, COUNT(*) AS member_count
            FROM (
                SELECT CASE
                    WHEN faction IS NULL OR TRIM(faction) = '' OR TRIM(faction) = $1 THEN $2
                    ELSE faction
                END AS label
                FROM members
            ) AS labelled
            GROUP BY label
            ORDER BY member_count DESC, label ASC
            "#,
        )
        .bind(FACTION_PLACEHOLDER)
        .bind(NO_FACTION_LABEL)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(GroupCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn top_provinces(&self, limit: i64) -> RepoResult<Vec<GroupCount>> {
        self.top_groups("province", limit).await
    }

    #[instrument(skip(self))]
    async fn top_positions(&self, limit: i64) -> RepoResult<Vec<GroupCount>> {
        self.top_groups("position", limit).await
    }

    #[instrument(skip(self))]
    async fn age_histogram(&self) -> RepoResult<Vec<AgeBucketStat>> {
        let sql = age_histogram_sql();
        let rows = sqlx::query_as::<_, AgeBucketModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut stats: Vec<AgeBucketStat> = rows
            .into_iter()
            .filter_map(|row| {
                let label = row.bucket.clone();
                let stat = try_age_bucket(row);
                if stat.is_none() {
                    warn!(bucket = %label, "Ignoring unrecognised age bucket");
                }
                stat
            })
            .collect();
        AgeBucketStat::sort_in_report_order(&mut stats);

        Ok(stats)
    }

    #[instrument(skip(self))]
    async fn member_names(&self) -> RepoResult<Vec<Option<String>>> {
        let names = sqlx::query_scalar::<_, Option<String>>("SELECT name FROM members")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(names)
    }

    #[instrument(skip(self))]
    async fn leadership_counts(&self) -> RepoResult<Vec<LeadershipCount>> {
        let rows = sqlx::query_as::<_, LeadershipModel>(LEADERSHIP_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().filter_map(try_leadership).collect())
    }

    #[instrument(skip(self))]
    async fn age_summary(&self) -> RepoResult<AgeSummary> {
        let row = sqlx::query_as::<_, AgeSummaryModel>(
            r#"
            SELECT AVG(age)::float8 AS average_age, MIN(age) AS min_age, MAX(age) AS max_age
            FROM members
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(AgeSummary::from(row))
    }

    #[instrument(skip(self))]
    async fn recent_members(&self, limit: i64) -> RepoResult<Vec<RecentMember>> {
        let rows = sqlx::query_as::<_, RecentMemberModel>(
            r#"
            SELECT id, name, faction, position, province
            FROM members
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(RecentMember::from).collect())
    }

    #[instrument(skip(self))]
    async fn distinct_values(&self, field: OptionField) -> RepoResult<Vec<String>> {
        let sql = distinct_values_sql(field);
        let mut query = sqlx::query_scalar::<_, String>(&sql);

        if field.excludes_placeholder() {
            query = query.bind(FACTION_PLACEHOLDER);
        }
        if let Some(limit) = field.limit() {
            query = query.bind(limit);
        }

        let values = query.fetch_all(&self.pool).await.map_err(map_db_error)?;
        Ok(values)
    }
}
