//! Seed the menu from a YAML file.
//!
//! Categories and products are upserted by name, so running the same file
//! twice updates rows instead of duplicating them. Product photos are read
//! from disk (relative to the YAML file) and uploaded to object storage.
//!
//! ## YAML Format
//!
//! ```yaml
//! categories:
//!   - name: Pães Artesanais
//!     order: 1
//!     products:
//!       - name: Baguete Francesa
//!         description: Clássica baguete francesa de casca crocante.
//!         price: 9.90
//!         image: images/baguete.png
//!         featured: true
//!   - name: Cafés
//!     order: 2
//!     active: false
//!     products: []
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, instrument, warn};

use padoca_core::{CategoryId, CategoryInput, Price, ProductDraft, ProductInput};

use crate::db::{CategoryRepository, ProductRepository, RepositoryError};
use crate::storage::{StorageClient, StorageError, naming, object_name};

/// Errors that abort a seed run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Invalid seed file: {0}")]
    Config(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Whole seed file.
#[derive(Debug, Deserialize)]
pub struct MenuSeedConfig {
    pub categories: Vec<CategorySeed>,
}

/// One category and its products.
#[derive(Debug, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    pub order: i32,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

/// One product.
#[derive(Debug, Deserialize)]
pub struct ProductSeed {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: PriceValue,
    /// Photo path, relative to the seed file.
    pub image: Option<PathBuf>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// A price written either as a YAML number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    fn as_input(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Parse into a `Price`.
    ///
    /// # Errors
    ///
    /// Returns the parse failure as text.
    pub fn parse(&self) -> Result<Price, String> {
        Price::parse_input(&self.as_input()).map_err(|e| e.to_string())
    }
}

const fn default_true() -> bool {
    true
}

/// Counters reported after a run.
#[derive(Debug, Default)]
pub struct SeedResult {
    pub categories_created: u64,
    pub categories_updated: u64,
    pub products_created: u64,
    pub products_updated: u64,
    pub images_uploaded: u64,
    /// Per-product failures (`product_name`, error message). The run continues.
    pub errors: Vec<(String, String)>,
}

/// Parse a seed file.
///
/// # Errors
///
/// Returns `SeedError::Config` if the YAML does not match the expected shape.
pub fn parse_config(content: &str) -> Result<MenuSeedConfig, SeedError> {
    serde_yaml::from_str(content).map_err(|e| SeedError::Config(format!("Failed to parse YAML: {e}")))
}

/// Check a parsed seed file, returning every problem found.
#[must_use]
pub fn validate_config(config: &MenuSeedConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let mut category_names = HashSet::new();
    let mut product_names = HashSet::new();

    for category in &config.categories {
        let name = category.name.trim();
        if name.is_empty() {
            errors.push("category with a blank name".to_string());
        } else if !category_names.insert(name.to_string()) {
            errors.push(format!("duplicate category: {name}"));
        }

        for product in &category.products {
            let product_name = product.name.trim();
            if product_name.is_empty() {
                errors.push(format!("product with a blank name in {name}"));
            } else if !product_names.insert(product_name.to_string()) {
                errors.push(format!("duplicate product: {product_name}"));
            }
            if let Err(e) = product.price.parse() {
                errors.push(format!("{product_name}: {e}"));
            }
        }
    }

    errors
}

/// Seed the menu from a YAML file.
///
/// Without a storage client, photos are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, fails validation,
/// or a category write fails.
#[instrument(skip(pool, storage), fields(path = %path.display()))]
pub async fn seed_from_file(
    pool: &PgPool,
    storage: Option<&StorageClient>,
    path: &Path,
    clear_existing: bool,
) -> Result<SeedResult, SeedError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SeedError::Io(format!("Failed to read {}: {e}", path.display())))?;
    let config = parse_config(&content)?;

    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(SeedError::Config(errors.join("; ")));
    }

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    seed_from_config(pool, storage, &config, base_dir, clear_existing).await
}

/// Seed the menu from a parsed configuration.
///
/// # Errors
///
/// Returns an error if clearing or a category write fails. Product failures
/// are collected in `SeedResult::errors`.
#[instrument(skip_all, fields(categories = config.categories.len()))]
pub async fn seed_from_config(
    pool: &PgPool,
    storage: Option<&StorageClient>,
    config: &MenuSeedConfig,
    base_dir: &Path,
    clear_existing: bool,
) -> Result<SeedResult, SeedError> {
    let categories = CategoryRepository::new(pool);
    let products = ProductRepository::new(pool);

    if clear_existing {
        let deleted_products = products.delete_all().await?;
        let deleted_categories = categories.delete_all().await?;
        info!(deleted_products, deleted_categories, "Cleared existing menu");
    }

    let mut result = SeedResult::default();

    for category_seed in &config.categories {
        let input = CategoryInput::new(&category_seed.name, category_seed.active, category_seed.order)
            .map_err(|e| SeedError::Config(e.to_string()))?;

        let category_id = match categories.find_by_name(&input.name).await? {
            Some(existing) => {
                categories.update(existing.id, &input).await?;
                result.categories_updated += 1;
                existing.id
            }
            None => {
                let created = categories.create(&input).await?;
                result.categories_created += 1;
                created.id
            }
        };

        for product_seed in &category_seed.products {
            if let Err(e) =
                seed_product(&products, storage, category_id, product_seed, base_dir, &mut result)
                    .await
            {
                warn!(product = %product_seed.name, error = %e, "Failed to seed product");
                result.errors.push((product_seed.name.clone(), e.to_string()));
            }
        }
    }

    info!(
        categories_created = result.categories_created,
        categories_updated = result.categories_updated,
        products_created = result.products_created,
        products_updated = result.products_updated,
        images_uploaded = result.images_uploaded,
        errors = result.errors.len(),
        "Seeding complete"
    );

    Ok(result)
}

async fn seed_product(
    products: &ProductRepository<'_>,
    storage: Option<&StorageClient>,
    category_id: CategoryId,
    seed: &ProductSeed,
    base_dir: &Path,
    result: &mut SeedResult,
) -> Result<(), SeedError> {
    let existing = products.find_by_name(seed.name.trim()).await?;

    let uploaded = match (&seed.image, storage) {
        (Some(image), Some(storage)) => {
            let url = upload_photo(storage, &base_dir.join(image)).await?;
            result.images_uploaded += 1;
            Some(url)
        }
        (Some(image), None) => {
            warn!(image = %image.display(), "No storage configured, skipping photo");
            None
        }
        (None, _) => None,
    };

    let draft = ProductDraft {
        category_id: Some(category_id.to_string()),
        name: seed.name.clone(),
        description: seed.description.clone(),
        price: seed.price.as_input(),
        image_url: uploaded.or_else(|| existing.as_ref().and_then(|p| p.image_url.clone())),
        active: seed.active,
        is_featured: seed.featured,
    };
    let input: ProductInput = draft
        .validate()
        .map_err(|e| SeedError::Config(e.to_string()))?;

    match existing {
        Some(product) => {
            products.update(product.id, &input).await?;
            result.products_updated += 1;
        }
        None => {
            products.create(&input).await?;
            result.products_created += 1;
        }
    }

    Ok(())
}

/// Upload a local image file under a fresh object name.
///
/// # Errors
///
/// Returns `SeedError::Io` if the file cannot be read, or the storage error.
pub async fn upload_photo(storage: &StorageClient, path: &Path) -> Result<String, SeedError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| SeedError::Io(format!("Failed to read {}: {e}", path.display())))?;
    let file_name = path.file_name().and_then(|n| n.to_str());
    let name = object_name(file_name, None);
    let content_type = naming::content_type_for(&naming::extension(file_name, None));

    Ok(storage.upload(&name, bytes, content_type, false).await?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const MENU: &str = r"
categories:
  - name: Pães Artesanais
    order: 1
    products:
      - name: Baguete Francesa
        description: Clássica baguete francesa de casca crocante.
        price: 9.90
        image: images/baguete.png
        featured: true
      - name: Focaccia de Alecrim
        price: '18,00'
  - name: Cafés
    order: 2
    active: false
";

    #[test]
    fn test_parse_config() {
        let config = parse_config(MENU).unwrap();
        assert_eq!(config.categories.len(), 2);

        let paes = &config.categories[0];
        assert!(paes.active);
        assert_eq!(paes.products.len(), 2);
        assert!(paes.products[0].featured);
        assert_eq!(paes.products[0].price.parse().unwrap(), Price::from_centavos(990));
        assert_eq!(paes.products[1].price.parse().unwrap(), Price::from_centavos(1800));
        assert!(paes.products[1].image.is_none());

        let cafes = &config.categories[1];
        assert!(!cafes.active);
        assert!(cafes.products.is_empty());
    }

    #[test]
    fn test_validate_config_ok() {
        let config = parse_config(MENU).unwrap();
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_validate_config_reports_problems() {
        let config = parse_config(
            r"
categories:
  - name: Doces
    order: 1
    products:
      - name: Quindim
        price: -1
      - name: Quindim
        price: abc
  - name: ' '
    order: 2
",
        )
        .unwrap();

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("duplicate product: Quindim")));
        assert!(errors.iter().any(|e| e.contains("blank name")));
    }

    #[test]
    fn test_parse_config_rejects_wrong_shape() {
        assert!(matches!(
            parse_config("categories: 3"),
            Err(SeedError::Config(_))
        ));
    }
}
