//! Product CRUD.

use sqlx::PgPool;
use tracing::instrument;

use padoca_core::{Product, ProductId, ProductInput};

use super::{RepositoryError, affected};

/// Label shown when a product points at a deleted category.
pub const UNKNOWN_CATEGORY: &str = "Desconhecida";

/// A product joined with its category's name, for the product list.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductWithCategory {
    #[sqlx(flatten)]
    pub product: Product,
    pub category_name: Option<String>,
}

impl ProductWithCategory {
    /// Category name, or "Desconhecida" when the category is gone.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category_name.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }
}

/// Repository for the `products` table.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new repository with the given pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every product ordered by name, with its category name when it exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_with_category(&self) -> Result<Vec<ProductWithCategory>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductWithCategory>(
            r"
            SELECT p.id, p.category_id, p.name, p.description, p.price, p.image_url,
                   p.active, p.is_featured, c.name AS category_name
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            ORDER BY p.name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, category_id, name, description, price, image_url, active, is_featured
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Find a product by exact name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, category_id, name, description, price, image_url, active, is_featured
            FROM products
            WHERE name = $1
            LIMIT 1
            ",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &ProductInput) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (category_id, name, description, price, image_url, active, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, category_id, name, description, price, image_url, active, is_featured
            ",
        )
        .bind(input.category_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.image_url.as_deref())
        .bind(input.active)
        .bind(input.is_featured)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Overwrite a product's fields, image URL included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    #[instrument(skip(self, input), fields(product_id = %id))]
    pub async fn update(&self, id: ProductId, input: &ProductInput) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET category_id = $2, name = $3, description = $4, price = $5,
                image_url = $6, active = $7, is_featured = $8
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(input.category_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.image_url.as_deref())
        .bind(input.active)
        .bind(input.is_featured)
        .execute(self.pool)
        .await?;

        affected(result.rows_affected())
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        affected(result.rows_affected())
    }

    /// Delete every product. Used by `padoca-cli seed --clear`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products")
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Mark the first `count` products (by name) as featured.
    ///
    /// Other products keep their current flag. Returns the number marked.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    #[instrument(skip(self))]
    pub async fn mark_featured(&self, count: i64) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET is_featured = TRUE
            WHERE id IN (
                SELECT id FROM products ORDER BY name LIMIT $1
            )
            ",
        )
        .bind(count)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
