//! Database operations for the storefront.
//!
//! The storefront only reads the menu and the store-hours setting. Its one
//! write is the `sessions` row recorded when a customer introduces themselves.
//!
//! ## Tables read
//!
//! - `categories` - active menu sections, ordered by `sort_order`
//! - `products` - active menu items
//! - `settings` - the `store_hours` record
//!
//! ## Tables written
//!
//! - `sessions` - one row per welcomed customer
//!
//! # Migrations
//!
//! Migrations live in `crates/admin/migrations/` and are run via:
//! ```bash
//! cargo run -p padoca-cli -- migrate
//! ```

pub mod catalog;
pub mod sessions;
pub mod settings;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use catalog::CatalogRepository;
pub use sessions::SessionRepository;
pub use settings::SettingsRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
