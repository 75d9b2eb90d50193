//! Store settings routes.
//!
//! Manages the `store_hours` record that drives the storefront's open/closed
//! indicator.

use askama::Template;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use tracing::instrument;

use padoca_core::StoreHours;
use padoca_core::forms::store_hours_input;

use crate::db::SettingsRepository;
use crate::filters;
use crate::state::AppState;

use super::{FlashQuery, redirect_error, redirect_success, render, render_with_status};

const SETTINGS_PATH: &str = "/settings";

// =============================================================================
// Templates
// =============================================================================

/// Values shown in the store-hours form.
#[derive(Debug, Clone)]
pub struct HoursFormView {
    pub open_time: String,
    pub close_time: String,
    pub is_open_today: bool,
}

impl From<&StoreHours> for HoursFormView {
    fn from(hours: &StoreHours) -> Self {
        Self {
            open_time: hours.open_time.to_string(),
            close_time: hours.close_time.to_string(),
            is_open_today: hours.is_open_today,
        }
    }
}

/// Settings page template.
#[derive(Template)]
#[template(path = "settings/index.html")]
pub struct SettingsTemplate {
    pub current_path: String,
    pub form: HoursFormView,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

// =============================================================================
// Form Data
// =============================================================================

/// Store-hours form submission.
#[derive(Debug, Deserialize)]
pub struct HoursForm {
    #[serde(default)]
    pub open_time: String,
    #[serde(default)]
    pub close_time: String,
    /// Checkbox: present ("on") when checked.
    pub is_open_today: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Store-hours form. Shows the defaults (08:00 to 22:00, open) when nothing
/// was saved yet.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Query(flash): Query<FlashQuery>) -> Response {
    let (hours, load_error) = match SettingsRepository::new(state.pool()).store_hours().await {
        Ok(hours) => (hours.unwrap_or_default(), None),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load store hours");
            (
                StoreHours::default(),
                Some("Erro ao carregar configurações.".to_string()),
            )
        }
    };

    render(&SettingsTemplate {
        current_path: SETTINGS_PATH.to_string(),
        form: HoursFormView::from(&hours),
        success_message: flash.success,
        error_message: load_error.or(flash.error),
    })
}

/// Save the store hours.
#[instrument(skip(state))]
pub async fn save(State(state): State<AppState>, Form(form): Form<HoursForm>) -> Response {
    let is_open_today = form.is_open_today.is_some();
    let hours = match store_hours_input(&form.open_time, &form.close_time, is_open_today) {
        Ok(hours) => hours,
        Err(e) => {
            let template = SettingsTemplate {
                current_path: SETTINGS_PATH.to_string(),
                form: HoursFormView {
                    open_time: form.open_time,
                    close_time: form.close_time,
                    is_open_today,
                },
                success_message: None,
                error_message: Some(e.to_string()),
            };
            return render_with_status(&template, StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match SettingsRepository::new(state.pool())
        .save_store_hours(&hours)
        .await
    {
        Ok(()) => {
            tracing::info!(
                open_time = %hours.open_time,
                close_time = %hours.close_time,
                is_open_today = hours.is_open_today,
                "Store hours saved"
            );
            redirect_success(SETTINGS_PATH, "Configurações salvas com sucesso!")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save store hours");
            redirect_error(SETTINGS_PATH, "Erro ao salvar configurações.")
        }
    }
}
