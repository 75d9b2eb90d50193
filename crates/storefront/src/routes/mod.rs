//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Menu page (?category=featured|<uuid>, ?q=)
//! GET  /menu              - Tabs + product grid fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart              - Cart drawer
//! POST /cart/add          - Add product (returns cart bar, triggers cart-updated)
//! POST /cart/remove       - Remove line (returns drawer, triggers cart-updated)
//! POST /cart/clear        - Empty cart (returns closed drawer, triggers cart-updated)
//! GET  /cart/count        - Floating cart bar
//!
//! # Welcome
//! GET  /welcome           - Name prompt (empty once answered)
//! POST /welcome           - Accept name
//!
//! # Store status
//! GET  /status            - Open/closed badge fragment
//! GET  /api/store-status  - Open/closed as JSON
//! ```

pub mod cart;
pub mod home;
pub mod status;
pub mod welcome;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/menu", get(home::menu))
        .nest("/cart", cart_routes())
        .route("/welcome", get(welcome::show).post(welcome::submit))
        .route("/status", get(status::badge))
        .route("/api/store-status", get(status::api))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::config::tests::test_config;
    use crate::state::AppState;

    /// App wired to a pool that never connects; only handlers that stay off
    /// the database can be exercised.
    fn test_app() -> axum::Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/padoca_test")
            .unwrap();
        crate::app(AppState::new(test_config(), pool))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_empty_cart_bar_is_hidden() {
        let response = test_app()
            .oneshot(Request::get("/cart/count").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("id=\"cart-bar\""));
        assert!(!body.contains("Ver Escolhidos da Vez"));
    }

    #[tokio::test]
    async fn test_empty_cart_drawer() {
        let response = test_app()
            .oneshot(Request::get("/cart").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Nenhum item escolhido ainda."));
    }

    #[tokio::test]
    async fn test_clear_triggers_cart_updated() {
        let response = test_app().oneshot(form("/cart/clear", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("HX-Trigger").unwrap(),
            crate::routes::cart::CART_UPDATED_EVENT
        );
    }

    #[tokio::test]
    async fn test_add_rejects_malformed_product_id() {
        let response = test_app()
            .oneshot(form("/cart/add", "product_id=not-a-uuid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_remove_absent_product_is_noop() {
        let id = padoca_core::ProductId::new_v4();
        let response = test_app()
            .oneshot(form("/cart/remove", &format!("product_id={id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Nenhum item escolhido ainda."));
    }

    #[tokio::test]
    async fn test_welcome_prompt_for_new_customer() {
        let response = test_app()
            .oneshot(Request::get("/welcome").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Acessar Cardápio"));
    }

    #[tokio::test]
    async fn test_welcome_rejects_blank_name() {
        let response = test_app()
            .oneshot(form("/welcome", "name=+++"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Por favor, diga como podemos te chamar."));
    }

    #[tokio::test]
    async fn test_welcome_rejects_long_name() {
        let response = test_app()
            .oneshot(form("/welcome", &format!("name={}", "a".repeat(21))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Use no máximo 20 caracteres."));
    }
}
