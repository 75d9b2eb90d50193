//! Settings database operations.
//!
//! The only setting today is `store_hours`, read by the storefront's
//! open/closed indicator.

use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::instrument;

use padoca_core::StoreHours;
use padoca_core::store_hours::STORE_HOURS_KEY;

use super::RepositoryError;

/// Repository for the `settings` table.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new repository with the given pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The saved store hours, or `None` if never saved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the stored JSON has the
    /// wrong shape.
    #[instrument(skip(self))]
    pub async fn store_hours(&self) -> Result<Option<StoreHours>, RepositoryError> {
        let value: Option<JsonValue> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
                .bind(STORE_HOURS_KEY)
                .fetch_optional(self.pool)
                .await?;

        value
            .map(|v| {
                serde_json::from_value(v).map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid store_hours value: {e}"))
                })
            })
            .transpose()
    }

    /// Save the store hours: update the existing row, or insert one.
    ///
    /// Concurrent saves are last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    #[instrument(skip(self, hours))]
    pub async fn save_store_hours(&self, hours: &StoreHours) -> Result<(), RepositoryError> {
        let value = serde_json::to_value(hours)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

        let existing: Option<i32> = sqlx::query_scalar("SELECT id FROM settings WHERE key = $1")
            .bind(STORE_HOURS_KEY)
            .fetch_optional(self.pool)
            .await?;

        match existing {
            Some(id) => {
                sqlx::query("UPDATE settings SET value = $2, updated_at = NOW() WHERE id = $1")
                    .bind(id)
                    .bind(&value)
                    .execute(self.pool)
                    .await?;
            }
            None => {
                sqlx::query("INSERT INTO settings (key, value) VALUES ($1, $2)")
                    .bind(STORE_HOURS_KEY)
                    .bind(&value)
                    .execute(self.pool)
                    .await?;
            }
        }

        Ok(())
    }
}
