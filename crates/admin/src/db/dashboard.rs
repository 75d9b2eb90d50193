//! Dashboard counters.

use sqlx::PgPool;
use tracing::instrument;

use super::RepositoryError;

/// Totals shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub products: i64,
    pub active_categories: i64,
    pub sessions: i64,
}

/// Repository for dashboard aggregates.
pub struct DashboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DashboardRepository<'a> {
    /// Create a new repository with the given pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count products, active categories, and welcomed sessions.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn counts(&self) -> Result<DashboardCounts, RepositoryError> {
        let (products, active_categories, sessions): (i64, i64, i64) = sqlx::query_as(
            r"
            SELECT
                (SELECT COUNT(*) FROM products),
                (SELECT COUNT(*) FROM categories WHERE active = TRUE),
                (SELECT COUNT(*) FROM sessions)
            ",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(DashboardCounts {
            products,
            active_categories,
            sessions,
        })
    }
}
