//! Read-only access to the active menu.

use sqlx::PgPool;

use padoca_core::{Category, Product, ProductId};

use super::RepositoryError;

/// Repository for menu reads.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Active categories in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn active_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, active, sort_order
            FROM categories
            WHERE active = TRUE
            ORDER BY sort_order
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// All active products.
    ///
    /// Ordered by name so that the image-first sort has a stable baseline.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn active_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, category_id, name, description, price, image_url, active, is_featured
            FROM products
            WHERE active = TRUE
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// A single active product, for adding to the cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn active_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, category_id, name, description, price, image_url, active, is_featured
            FROM products
            WHERE id = $1 AND active = TRUE
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }
}
