//! Customer session records.

use sqlx::PgPool;

use padoca_core::{CustomerName, CustomerSessionId};

use super::RepositoryError;

/// Repository for the `sessions` table.
pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a welcomed customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn record(
        &self,
        id: CustomerSessionId,
        name: &CustomerName,
    ) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO sessions (id, customer_name) VALUES ($1, $2)")
            .bind(id)
            .bind(name.as_str())
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
