//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Liveness check
//! GET  /health/ready             - Readiness check (database)
//!
//! # Dashboard
//! GET  /                         - Counters and quick links
//!
//! # Categories
//! GET  /categories               - List (by order)
//! GET  /categories/new           - New category form
//! POST /categories               - Create
//! GET  /categories/{id}/edit     - Edit form
//! POST /categories/{id}          - Update
//! POST /categories/{id}/delete   - Delete (products untouched)
//!
//! # Products
//! GET  /products                 - List (by name)
//! GET  /products/new             - New product form
//! POST /products                 - Create (multipart, optional image)
//! GET  /products/{id}/edit       - Edit form
//! POST /products/{id}            - Update (multipart)
//! POST /products/{id}/delete     - Delete
//!
//! # Settings
//! GET  /settings                 - Store hours form
//! POST /settings                 - Save store hours
//! ```
//!
//! Pages are plain HTML forms. Outcomes of writes travel back on the list
//! page as `?success=` or `?error=`.

pub mod categories;
pub mod dashboard;
pub mod products;
pub mod settings;

use askama::Template;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;

/// Build the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route(
            "/categories",
            get(categories::index).post(categories::create),
        )
        .route("/categories/new", get(categories::new))
        .route("/categories/{id}", post(categories::update))
        .route("/categories/{id}/edit", get(categories::edit))
        .route("/categories/{id}/delete", post(categories::delete))
        .route("/products", get(products::index).post(products::create))
        .route("/products/new", get(products::new))
        .route("/products/{id}", post(products::update))
        .route("/products/{id}/edit", get(products::edit))
        .route("/products/{id}/delete", post(products::delete))
        .route("/settings", get(settings::show).post(settings::save))
        .layer(DefaultBodyLimit::max(products::MAX_UPLOAD_BYTES))
}

/// Flash messages passed back through the query string.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub success: Option<String>,
    pub error: Option<String>,
}

/// Redirect to `path` carrying a flash message as `?{key}=`.
fn redirect_with(path: &str, key: &str, message: &str) -> Response {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(key, message)
        .finish();
    Redirect::to(&format!("{path}?{query}")).into_response()
}

/// Redirect with `?success=`.
pub fn redirect_success(path: &str, message: &str) -> Response {
    redirect_with(path, "success", message)
}

/// Redirect with `?error=`.
pub fn redirect_error(path: &str, message: &str) -> Response {
    redirect_with(path, "error", message)
}

/// Render a template into an HTML response with the given status.
pub fn render_with_status<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Render a template into a 200 HTML response.
pub fn render<T: Template>(template: &T) -> Response {
    render_with_status(template, StatusCode::OK)
}
