//! Seed the menu from a YAML file.
//!
//! See `padoca_admin::seed` for the file format. Photos are uploaded when
//! `STORAGE_URL` and `STORAGE_SERVICE_KEY` are set, and skipped otherwise.

use std::path::Path;

use tracing::{error, info, warn};

use padoca_admin::config::{ConfigError, StorageConfig};
use padoca_admin::seed::{parse_config, seed_from_file, validate_config};
use padoca_admin::storage::StorageClient;

/// Seed categories and products.
///
/// # Errors
///
/// Returns an error if the file is missing or invalid, storage settings are
/// insecure, or database operations fail.
pub async fn menu(file_path: &Path, clear_existing: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file_path.exists() {
        return Err(format!("File not found: {}", file_path.display()).into());
    }

    info!(path = %file_path.display(), "Loading menu from file");

    // Validate before touching the database
    let content = tokio::fs::read_to_string(file_path).await?;
    let config = parse_config(&content)?;
    let errors = validate_config(&config);
    if !errors.is_empty() {
        error!("Menu validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(format!("{} validation errors found", errors.len()).into());
    }
    info!(categories = config.categories.len(), "Menu validated successfully");

    let pool = super::connect().await?;

    let storage = match StorageConfig::from_env() {
        Ok(storage_config) => Some(StorageClient::new(&storage_config)),
        Err(ConfigError::MissingEnvVar(var)) => {
            warn!(%var, "Object storage not configured, photos will be skipped");
            None
        }
        Err(e) => return Err(e.into()),
    };

    info!(clear_existing, "Starting seeding process");
    let result = seed_from_file(&pool, storage.as_ref(), file_path, clear_existing).await?;

    info!("Seeding complete!");
    info!(
        "  Categories: {} created, {} updated",
        result.categories_created, result.categories_updated
    );
    info!(
        "  Products: {} created, {} updated",
        result.products_created, result.products_updated
    );
    info!("  Photos uploaded: {}", result.images_uploaded);

    if !result.errors.is_empty() {
        error!("  Errors: {}", result.errors.len());
        for (product, err) in &result.errors {
            error!("    - {product}: {err}");
        }
    }

    Ok(())
}
