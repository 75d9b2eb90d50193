//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Response};
use tracing::instrument;

use crate::db::{DashboardCounts, DashboardRepository};
use crate::filters;
use crate::state::AppState;

use super::render;

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub current_path: String,
    pub counts: DashboardCounts,
    /// Set when the counters could not be loaded.
    pub error_message: Option<String>,
}

/// Dashboard page handler.
///
/// A failed count query still renders the page, with zeroed counters.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Response {
    let (counts, error_message) = match DashboardRepository::new(state.pool()).counts().await {
        Ok(counts) => (counts, None),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load dashboard counts");
            (
                DashboardCounts::default(),
                Some("Não foi possível carregar os números.".to_string()),
            )
        }
    };

    render(&DashboardTemplate {
        current_path: "/".to_string(),
        counts,
        error_message,
    })
}
