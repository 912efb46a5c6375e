//! Test fixtures and data generators
//!
//! Seeds uniquely-marked member rows so tests can run against a shared
//! database without seeing each other's data.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

const CREATE_MEMBERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS members (
        id BIGINT PRIMARY KEY,
        province_id INTEGER,
        name TEXT,
        birthplace TEXT,
        birth_date TEXT,
        position TEXT,
        faction TEXT,
        address TEXT,
        remarks TEXT,
        age INTEGER,
        province TEXT,
        is_chair BOOLEAN NOT NULL DEFAULT FALSE,
        is_vice_chair BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Rows inserted for one test, identified by a marker in every name
pub struct SeededMembers {
    pool: PgPool,
    pub marker: String,
    pub ids: Vec<i64>,
}

impl SeededMembers {
    /// Insert three members: a chair aged 58, a vice-chair aged 40 and an
    /// ordinary member with a quoted nickname and no age
    pub async fn seed() -> Result<Self> {
        let url = std::env::var("DATABASE_URL")?;
        let pool = PgPoolOptions::new().max_connections(2).connect(&url).await?;
        sqlx::query(CREATE_MEMBERS_TABLE).execute(&pool).await?;

        let suffix = unique_suffix();
        let base = 9_000_000_000_i64
            + i64::from(std::process::id()) * 10_000
            + suffix as i64 * 10;
        let marker = format!("Zqx{}n{}q", std::process::id(), suffix);

        let rows: [(i64, String, Option<i32>, bool, bool); 3] = [
            (base + 1, format!("Budi {marker}"), Some(58), true, false),
            (base + 2, format!("Ahmad {marker}"), Some(40), false, true),
            (base + 3, format!("Dewi \"Ibu\" {marker}"), None, false, false),
        ];

        for (id, name, age, is_chair, is_vice_chair) in &rows {
            sqlx::query(
                r#"
                INSERT INTO members (id, name, faction, province, age, is_chair, is_vice_chair)
                VALUES ($1, $2, 'Fraksi Integrasi', 'Jawa Barat', $3, $4, $5)
                "#,
            )
            .bind(id)
            .bind(name)
            .bind(age)
            .bind(is_chair)
            .bind(is_vice_chair)
            .execute(&pool)
            .await?;
        }

        Ok(Self {
            pool,
            marker,
            ids: rows.iter().map(|r| r.0).collect(),
        })
    }

    /// Remove the seeded rows
    pub async fn cleanup(self) -> Result<()> {
        sqlx::query("DELETE FROM members WHERE id = ANY($1)")
            .bind(&self.ids)
            .execute(&self.pool)
            .await?;
        self.pool.close().await;
        Ok(())
    }
}

/// Success envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

/// Paginated success envelope
#[derive(Debug, Deserialize)]
pub struct PageEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: i64,
    pub page_size: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub name: Option<String>,
    pub faction: Option<String>,
    pub age: Option<i32>,
    pub is_chair: bool,
    pub is_vice_chair: bool,
}

#[derive(Debug, Deserialize)]
pub struct Count {
    pub total: i64,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
