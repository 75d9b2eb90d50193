//! Category management routes.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use tracing::instrument;

use padoca_core::forms::next_category_order;
use padoca_core::{Category, CategoryId, CategoryInput};

use crate::db::{CategoryRepository, RepositoryError};
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

use super::{FlashQuery, redirect_error, redirect_success, render, render_with_status};

const LIST_PATH: &str = "/categories";

// =============================================================================
// Templates
// =============================================================================

/// Category list page.
#[derive(Template)]
#[template(path = "categories/index.html")]
pub struct CategoriesTemplate {
    pub current_path: String,
    pub categories: Vec<Category>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

/// Values shown in the category form.
#[derive(Debug, Clone)]
pub struct CategoryFormView {
    pub name: String,
    pub order: String,
    pub active: bool,
}

impl From<&Category> for CategoryFormView {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            order: category.order.to_string(),
            active: category.active,
        }
    }
}

/// New/edit category form.
#[derive(Template)]
#[template(path = "categories/form.html")]
pub struct CategoryFormTemplate {
    pub current_path: String,
    pub title: String,
    pub action: String,
    pub form: CategoryFormView,
    pub error_message: Option<String>,
}

impl CategoryFormTemplate {
    fn new_category(form: CategoryFormView, error_message: Option<String>) -> Self {
        Self {
            current_path: LIST_PATH.to_string(),
            title: "Nova Categoria".to_string(),
            action: LIST_PATH.to_string(),
            form,
            error_message,
        }
    }

    fn edit_category(id: CategoryId, form: CategoryFormView, error_message: Option<String>) -> Self {
        Self {
            current_path: LIST_PATH.to_string(),
            title: "Editar Categoria".to_string(),
            action: format!("{LIST_PATH}/{id}"),
            form,
            error_message,
        }
    }
}

// =============================================================================
// Form Data
// =============================================================================

/// Category form submission.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub order: String,
    /// Checkbox: present ("on") when checked.
    pub active: Option<String>,
}

impl CategoryForm {
    fn view(&self) -> CategoryFormView {
        CategoryFormView {
            name: self.name.clone(),
            order: self.order.clone(),
            active: self.active.is_some(),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List categories in display order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, Query(flash): Query<FlashQuery>) -> Response {
    let (categories, load_error) = match CategoryRepository::new(state.pool()).list().await {
        Ok(categories) => (categories, None),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list categories");
            (Vec::new(), Some("Erro ao carregar categorias.".to_string()))
        }
    };

    render(&CategoriesTemplate {
        current_path: LIST_PATH.to_string(),
        categories,
        success_message: flash.success,
        error_message: load_error.or(flash.error),
    })
}

/// New category form; the order defaults to one past the current count.
#[instrument(skip(state))]
pub async fn new(State(state): State<AppState>) -> Result<Response, AppError> {
    let existing = CategoryRepository::new(state.pool()).list().await?;
    let form = CategoryFormView {
        name: String::new(),
        order: next_category_order(&existing).to_string(),
        active: true,
    };

    Ok(render(&CategoryFormTemplate::new_category(form, None)))
}

/// Create a category.
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn create(State(state): State<AppState>, Form(form): Form<CategoryForm>) -> Response {
    let input = match CategoryInput::from_form(&form.name, form.active.is_some(), &form.order) {
        Ok(input) => input,
        Err(e) => {
            let template = CategoryFormTemplate::new_category(form.view(), Some(e.to_string()));
            return render_with_status(&template, StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match CategoryRepository::new(state.pool()).create(&input).await {
        Ok(category) => {
            tracing::info!(category_id = %category.id, "Category created");
            redirect_success(LIST_PATH, "Categoria criada!")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create category");
            redirect_error(LIST_PATH, "Erro ao criar categoria.")
        }
    }
}

/// Edit form for an existing category.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Response, AppError> {
    let category = CategoryRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {id}")))?;

    Ok(render(&CategoryFormTemplate::edit_category(
        id,
        CategoryFormView::from(&category),
        None,
    )))
}

/// Update a category.
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Form(form): Form<CategoryForm>,
) -> Response {
    let input = match CategoryInput::from_form(&form.name, form.active.is_some(), &form.order) {
        Ok(input) => input,
        Err(e) => {
            let template = CategoryFormTemplate::edit_category(id, form.view(), Some(e.to_string()));
            return render_with_status(&template, StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match CategoryRepository::new(state.pool()).update(id, &input).await {
        Ok(()) => redirect_success(LIST_PATH, "Categoria atualizada!"),
        Err(RepositoryError::NotFound) => redirect_error(LIST_PATH, "Categoria não encontrada."),
        Err(e) => {
            tracing::error!(error = %e, "Failed to update category");
            redirect_error(LIST_PATH, "Erro ao atualizar categoria.")
        }
    }
}

/// Delete a category. Its products stay, shown as "Desconhecida".
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<CategoryId>) -> Response {
    match CategoryRepository::new(state.pool()).delete(id).await {
        Ok(()) => {
            tracing::info!(category_id = %id, "Category deleted");
            redirect_success(LIST_PATH, "Categoria excluída.")
        }
        Err(RepositoryError::NotFound) => redirect_error(LIST_PATH, "Categoria não encontrada."),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete category");
            redirect_error(LIST_PATH, "Erro ao excluir categoria.")
        }
    }
}
