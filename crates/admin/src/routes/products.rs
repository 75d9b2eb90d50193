//! Product management routes.
//!
//! Create and update take `multipart/form-data` so the form can carry an
//! optional photo. The photo is uploaded to object storage only after the
//! other fields validate; the product row stores its public URL.

use askama::Template;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Response,
};
use tracing::instrument;

use padoca_core::{Category, Product, ProductDraft, ProductId, ProductInput};

use crate::db::{CategoryRepository, ProductRepository, ProductWithCategory, RepositoryError};
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;
use crate::storage::{StorageError, naming, object_name};

use super::{FlashQuery, redirect_error, redirect_success, render, render_with_status};

const LIST_PATH: &str = "/products";

/// Largest accepted request body for the product form (photo included).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// Views
// =============================================================================

/// Product row in the list.
#[derive(Debug, Clone)]
pub struct ProductRowView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image_url: Option<String>,
    pub active: bool,
    pub is_featured: bool,
}

impl From<&ProductWithCategory> for ProductRowView {
    fn from(row: &ProductWithCategory) -> Self {
        let p = &row.product;
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            description: p.description.clone(),
            category: row.category_label().to_string(),
            price: p.price.to_string(),
            image_url: p.image_url.clone().filter(|_| p.has_image()),
            active: p.active,
            is_featured: p.is_featured,
        }
    }
}

/// Option in the category select.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

/// Values shown in the product form.
#[derive(Debug, Clone, Default)]
pub struct ProductFormView {
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: Option<String>,
    pub active: bool,
    pub is_featured: bool,
}

impl ProductFormView {
    /// Blank form for a new product, preselecting `category`.
    fn blank(category: Option<&Category>) -> Self {
        Self {
            category_id: category.map(|c| c.id.to_string()).unwrap_or_default(),
            active: true,
            ..Self::default()
        }
    }

    fn from_draft(draft: &ProductDraft) -> Self {
        Self {
            category_id: draft.category_id.clone().unwrap_or_default(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price.clone(),
            image_url: draft.image_url.clone(),
            active: draft.active,
            is_featured: draft.is_featured,
        }
    }

    fn options(&self, categories: &[Category]) -> Vec<CategoryOption> {
        categories
            .iter()
            .map(|c| {
                let id = c.id.to_string();
                CategoryOption {
                    selected: id == self.category_id,
                    id,
                    name: c.name.clone(),
                }
            })
            .collect()
    }
}

impl From<&Product> for ProductFormView {
    fn from(product: &Product) -> Self {
        Self {
            category_id: product.category_id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format!("{:.2}", product.price.amount()),
            image_url: product.image_url.clone().filter(|_| product.has_image()),
            active: product.active,
            is_featured: product.is_featured,
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Product list page.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub current_path: String,
    pub products: Vec<ProductRowView>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

/// New/edit product form.
#[derive(Template)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub current_path: String,
    pub title: String,
    pub action: String,
    pub form: ProductFormView,
    pub categories: Vec<CategoryOption>,
    pub error_message: Option<String>,
}

impl ProductFormTemplate {
    fn build(
        product_id: Option<ProductId>,
        form: ProductFormView,
        categories: &[Category],
        error_message: Option<String>,
    ) -> Self {
        let (title, action) = match product_id {
            Some(id) => ("Editar Produto".to_string(), format!("{LIST_PATH}/{id}")),
            None => ("Novo Produto".to_string(), LIST_PATH.to_string()),
        };
        Self {
            current_path: LIST_PATH.to_string(),
            title,
            action,
            categories: form.options(categories),
            form,
            error_message,
        }
    }
}

// =============================================================================
// Multipart Form
// =============================================================================

/// A photo attached to the product form.
#[derive(Debug)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Everything the product form sent.
#[derive(Debug, Default)]
pub struct ProductSubmission {
    pub draft: ProductDraft,
    pub image: Option<ImageUpload>,
    /// "Remover foto" checkbox.
    pub remove_image: bool,
}

/// Read the multipart product form. An empty file input counts as no photo.
async fn read_submission(mut multipart: Multipart) -> Result<ProductSubmission, AppError> {
    let mut submission = ProductSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart field: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" {
            let file_name = field.file_name().map(String::from);
            let content_type = field.content_type().map(String::from);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read image: {e}")))?;
            if !bytes.is_empty() {
                submission.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read field {name}: {e}")))?;

        let draft = &mut submission.draft;
        match name.as_str() {
            "category_id" => draft.category_id = Some(value),
            "name" => draft.name = value,
            "description" => draft.description = value,
            "price" => draft.price = value,
            "active" => draft.active = true,
            "is_featured" => draft.is_featured = true,
            "remove_image" => submission.remove_image = true,
            _ => {}
        }
    }

    Ok(submission)
}

/// Upload the photo and return its public URL.
async fn upload_image(state: &AppState, image: ImageUpload) -> Result<String, StorageError> {
    let name = object_name(image.file_name.as_deref(), image.content_type.as_deref());
    let content_type = image
        .content_type
        .filter(|ct| ct.starts_with("image/"))
        .unwrap_or_else(|| {
            let ext = naming::extension(image.file_name.as_deref(), None);
            naming::content_type_for(&ext).to_string()
        });

    state
        .storage()
        .upload(&name, image.bytes, &content_type, false)
        .await
}

/// Validate the submission and upload its photo, if any.
///
/// On failure returns the message to show and the status to render with.
async fn prepare_input(
    state: &AppState,
    submission: ProductSubmission,
) -> Result<ProductInput, (String, StatusCode)> {
    let mut input = submission
        .draft
        .validate()
        .map_err(|e| (e.to_string(), StatusCode::UNPROCESSABLE_ENTITY))?;

    if let Some(image) = submission.image {
        let url = upload_image(state, image).await.map_err(|e| {
            tracing::error!(error = %e, "Image upload failed");
            (
                format!("Erro ao enviar imagem: {e}"),
                StatusCode::BAD_GATEWAY,
            )
        })?;
        input.image_url = Some(url);
    }

    Ok(input)
}

// =============================================================================
// Handlers
// =============================================================================

/// List products by name, with their category's name.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, Query(flash): Query<FlashQuery>) -> Response {
    let (products, load_error) = match ProductRepository::new(state.pool())
        .list_with_category()
        .await
    {
        Ok(rows) => (rows.iter().map(ProductRowView::from).collect(), None),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list products");
            (Vec::new(), Some("Erro ao carregar produtos.".to_string()))
        }
    };

    render(&ProductsTemplate {
        current_path: LIST_PATH.to_string(),
        products,
        success_message: flash.success,
        error_message: load_error.or(flash.error),
    })
}

/// New product form; the category defaults to the first by name.
#[instrument(skip(state))]
pub async fn new(State(state): State<AppState>) -> Result<Response, AppError> {
    let categories = CategoryRepository::new(state.pool()).list_by_name().await?;
    let form = ProductFormView::blank(categories.first());

    Ok(render(&ProductFormTemplate::build(
        None,
        form,
        &categories,
        None,
    )))
}

/// Create a product.
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let submission = read_submission(multipart).await?;
    let form = ProductFormView::from_draft(&submission.draft);

    let input = match prepare_input(&state, submission).await {
        Ok(input) => input,
        Err((message, status)) => {
            let categories = CategoryRepository::new(state.pool()).list_by_name().await?;
            let template = ProductFormTemplate::build(None, form, &categories, Some(message));
            return Ok(render_with_status(&template, status));
        }
    };

    Ok(match ProductRepository::new(state.pool()).create(&input).await {
        Ok(product) => {
            tracing::info!(product_id = %product.id, "Product created");
            redirect_success(LIST_PATH, "Produto criado!")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create product");
            redirect_error(LIST_PATH, "Erro ao criar produto.")
        }
    })
}

/// Edit form for an existing product.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Response, AppError> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    let categories = CategoryRepository::new(state.pool()).list_by_name().await?;

    Ok(render(&ProductFormTemplate::build(
        Some(id),
        ProductFormView::from(&product),
        &categories,
        None,
    )))
}

/// Update a product: keep the current photo, replace it, or remove it.
#[instrument(skip(state, multipart))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut submission = read_submission(multipart).await?;

    let Some(existing) = ProductRepository::new(state.pool()).get(id).await? else {
        return Ok(redirect_error(LIST_PATH, "Produto não encontrado."));
    };
    submission.draft.image_url = if submission.remove_image {
        None
    } else {
        existing.image_url
    };
    let form = ProductFormView::from_draft(&submission.draft);

    let input = match prepare_input(&state, submission).await {
        Ok(input) => input,
        Err((message, status)) => {
            let categories = CategoryRepository::new(state.pool()).list_by_name().await?;
            let template = ProductFormTemplate::build(Some(id), form, &categories, Some(message));
            return Ok(render_with_status(&template, status));
        }
    };

    Ok(match ProductRepository::new(state.pool()).update(id, &input).await {
        Ok(()) => redirect_success(LIST_PATH, "Produto atualizado!"),
        Err(RepositoryError::NotFound) => redirect_error(LIST_PATH, "Produto não encontrado."),
        Err(e) => {
            tracing::error!(error = %e, "Failed to update product");
            redirect_error(LIST_PATH, "Erro ao atualizar produto.")
        }
    })
}

/// Delete a product. Its photo stays in the bucket.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<ProductId>) -> Response {
    match ProductRepository::new(state.pool()).delete(id).await {
        Ok(()) => {
            tracing::info!(product_id = %id, "Product deleted");
            redirect_success(LIST_PATH, "Produto excluído.")
        }
        Err(RepositoryError::NotFound) => redirect_error(LIST_PATH, "Produto não encontrado."),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete product");
            redirect_error(LIST_PATH, "Erro ao excluir produto.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padoca_core::{CategoryId, Price};

    fn category(name: &str) -> Category {
        Category {
            id: CategoryId::new_v4(),
            name: name.to_string(),
            active: true,
            order: 1,
        }
    }

    #[test]
    fn test_blank_form_preselects_category() {
        let bolos = category("Bolos");
        let form = ProductFormView::blank(Some(&bolos));
        let options = form.options(&[bolos.clone(), category("Cafés")]);
        assert!(options[0].selected);
        assert!(!options[1].selected);
        assert!(form.active);
    }

    #[test]
    fn test_blank_form_without_categories() {
        let form = ProductFormView::blank(None);
        assert!(form.category_id.is_empty());
        assert!(form.options(&[]).is_empty());
    }

    #[test]
    fn test_form_view_formats_price_for_input() {
        let product = Product {
            id: ProductId::new_v4(),
            category_id: CategoryId::new_v4(),
            name: "Sonho".to_string(),
            description: String::new(),
            price: Price::from_centavos(750),
            image_url: Some("  ".to_string()),
            active: true,
            is_featured: false,
        };
        let form = ProductFormView::from(&product);
        assert_eq!(form.price, "7.50");
        assert_eq!(form.image_url, None);
    }

    #[test]
    fn test_row_view_unknown_category() {
        let row = ProductWithCategory {
            product: Product {
                id: ProductId::new_v4(),
                category_id: CategoryId::new_v4(),
                name: "Sonho".to_string(),
                description: String::new(),
                price: Price::from_centavos(750),
                image_url: None,
                active: true,
                is_featured: true,
            },
            category_name: None,
        };
        let view = ProductRowView::from(&row);
        assert_eq!(view.category, "Desconhecida");
        assert_eq!(view.price, "R$ 7,50");
    }
}
