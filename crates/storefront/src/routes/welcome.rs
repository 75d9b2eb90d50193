//! Welcome prompt asking for the customer's name.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use padoca_core::types::customer::MAX_CUSTOMER_NAME_CHARS;
use padoca_core::{CustomerName, CustomerNameError, CustomerSessionId};

use crate::db::SessionRepository;
use crate::error::Result;
use crate::models::CurrentCustomer;
use crate::models::session::{current_customer, set_current_customer};
use crate::state::AppState;

/// Welcome form data.
#[derive(Debug, Deserialize)]
pub struct WelcomeForm {
    #[serde(default)]
    pub name: String,
}

/// Name prompt fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/welcome.html")]
pub struct WelcomeTemplate {
    pub logo_url: Option<String>,
    pub name: String,
    pub error: Option<String>,
    pub max_chars: usize,
}

/// "Boas-vindas" fragment shown after the name is accepted.
#[derive(Template, WebTemplate)]
#[template(path = "partials/welcomed.html")]
pub struct WelcomedTemplate {
    pub logo_url: Option<String>,
    pub first_name: String,
}

fn error_message(err: &CustomerNameError) -> String {
    match err {
        CustomerNameError::Empty => "Por favor, diga como podemos te chamar.".to_string(),
        CustomerNameError::TooLong => {
            format!("Use no máximo {MAX_CUSTOMER_NAME_CHARS} caracteres.")
        }
    }
}

/// Show the prompt, or nothing if the customer already introduced themselves.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    if current_customer(&session).await?.is_some() {
        return Ok(Html("").into_response());
    }

    Ok(WelcomeTemplate {
        logo_url: state.logo_url().map(String::from),
        name: String::new(),
        error: None,
        max_chars: MAX_CUSTOMER_NAME_CHARS,
    }
    .into_response())
}

/// Accept the customer's name.
///
/// Invalid names re-render the prompt. The `sessions` row is best effort:
/// a failed insert is logged and the customer carries on.
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<WelcomeForm>,
) -> Result<Response> {
    let name = match CustomerName::parse(&form.name) {
        Ok(name) => name,
        Err(e) => {
            return Ok(WelcomeTemplate {
                logo_url: state.logo_url().map(String::from),
                name: form.name,
                error: Some(error_message(&e)),
                max_chars: MAX_CUSTOMER_NAME_CHARS,
            }
            .into_response());
        }
    };

    let customer = CurrentCustomer {
        id: CustomerSessionId::new_v4(),
        name,
    };

    if let Err(e) = SessionRepository::new(state.pool())
        .record(customer.id, &customer.name)
        .await
    {
        tracing::warn!(error = %e, "Failed to record customer session");
    }

    set_current_customer(&session, &customer).await?;
    tracing::info!(session_id = %customer.id, "Customer welcomed");

    Ok(WelcomedTemplate {
        logo_url: state.logo_url().map(String::from),
        first_name: customer.name.first_name().to_string(),
    }
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            error_message(&CustomerNameError::TooLong),
            "Use no máximo 20 caracteres."
        );
        assert!(error_message(&CustomerNameError::Empty).starts_with("Por favor"));
    }
}
