//! CLI subcommands.

pub mod featured;
pub mod logo;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::PgPool;

use padoca_admin::config::get_database_url;
use padoca_admin::db;

/// Connect to the menu database (`ADMIN_DATABASE_URL`, then `DATABASE_URL`).
///
/// # Errors
///
/// Returns an error if neither variable is set or the connection fails.
pub async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url: SecretString = get_database_url("ADMIN_DATABASE_URL")?;
    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&database_url).await?)
}
