//! Service context - dependency container for services
//!
//! Holds the member repository and the database pool it was built on.

use std::sync::Arc;

use roster_core::traits::MemberRepository;
use roster_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// The pool is optional so services can run over an in-memory repository;
/// without one, readiness checks report the database as unavailable.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: Option<PgPool>,

    // Repositories
    member_repo: Arc<dyn MemberRepository>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(pool: Option<PgPool>, member_repo: Arc<dyn MemberRepository>) -> Self {
        Self { pool, member_repo }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the context was built with one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Whether a pooled connection can be acquired right now
    pub async fn database_ready(&self) -> bool {
        match &self.pool {
            Some(pool) => pool.acquire().await.is_ok(),
            None => false,
        }
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("member_repo", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    member_repo: Option<Arc<dyn MemberRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the member repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let member_repo = self
            .member_repo
            .ok_or_else(|| ServiceError::validation("member_repo is required"))?;

        Ok(ServiceContext::new(self.pool, member_repo))
    }
}
