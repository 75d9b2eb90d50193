//! Store open/closed indicator.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State};
use chrono::Utc;
use tracing::instrument;

use padoca_core::{StoreHours, StoreStatus};

use crate::db::SettingsRepository;
use crate::models::StatusView;
use crate::state::AppState;

/// Status badge fragment (HTMX, polled).
#[derive(Template, WebTemplate)]
#[template(path = "partials/store_status.html")]
pub struct StoreStatusTemplate {
    pub status: StatusView,
}

/// Evaluate the store status right now.
///
/// A failed settings read is logged and treated as open, the same as a
/// store that never saved its hours.
pub async fn current_status(state: &AppState) -> StatusView {
    let hours: Option<StoreHours> = match SettingsRepository::new(state.pool()).store_hours().await
    {
        Ok(hours) => hours,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load store hours, assuming open");
            None
        }
    };

    let status = StoreStatus::at_instant(hours.as_ref(), Utc::now(), state.config().timezone);
    StatusView::new(status, hours.as_ref())
}

/// Render the status badge.
#[instrument(skip(state))]
pub async fn badge(State(state): State<AppState>) -> StoreStatusTemplate {
    StoreStatusTemplate {
        status: current_status(&state).await,
    }
}

/// Store status as JSON.
#[instrument(skip(state))]
pub async fn api(State(state): State<AppState>) -> Json<StatusView> {
    Json(current_status(&state).await)
}
