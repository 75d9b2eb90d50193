//! Mark products as "Queridinhos".

use padoca_admin::db::ProductRepository;

/// Mark the first `count` products (by name) as featured.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the update fails.
pub async fn mark(count: u32) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    let marked = ProductRepository::new(&pool)
        .mark_featured(i64::from(count))
        .await?;

    tracing::info!(marked, "Products marked as featured");
    Ok(())
}
