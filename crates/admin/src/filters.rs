//! Custom Askama template filters.

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Status pill text for the active flag.
///
/// Usage in templates: `{{ category.active|active_label }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn active_label(active: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(if active.to_string() == "true" {
        "Ativo"
    } else {
        "Inativo"
    })
}
