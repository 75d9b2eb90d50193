//! Store-hours setting lookup.

use serde_json::Value as JsonValue;
use sqlx::PgPool;

use padoca_core::StoreHours;
use padoca_core::store_hours::STORE_HOURS_KEY;

use super::RepositoryError;

/// Repository for the `settings` table.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The saved store hours, or `None` if the admin never saved them.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if the stored JSON has the wrong shape.
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
}
