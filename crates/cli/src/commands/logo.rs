//! Upload the bakery logo.
//!
//! The storefront derives the logo URL from `STORAGE_URL`, so the object
//! name is fixed and re-uploads overwrite it.

use std::path::Path;

use padoca_admin::config::StorageConfig;
use padoca_admin::storage::{LOGO_OBJECT_NAME, StorageClient};

/// Upload the logo and print its public URL.
///
/// # Errors
///
/// Returns an error if storage is not configured, the file cannot be read,
/// or the upload is rejected.
#[allow(clippy::print_stdout)]
pub async fn upload(file_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let storage = StorageClient::new(&StorageConfig::from_env()?);
    let bytes = tokio::fs::read(file_path)
        .await
        .map_err(|e| format!("Failed to read {}: {e}", file_path.display()))?;

    tracing::info!(
        file = %file_path.display(),
        bucket = %storage.bucket(),
        "Uploading logo"
    );
    let url = storage
        .upload(LOGO_OBJECT_NAME, bytes, "image/png", true)
        .await?;

    tracing::info!("Logo uploaded");
    println!("{url}");
    Ok(())
}
