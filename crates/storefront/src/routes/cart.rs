//! Cart route handlers.
//!
//! The cart lives in the session and is manipulated through HTMX fragments.
//! Every mutation emits an `HX-Trigger: cart-updated` header so the floating
//! cart bar refreshes itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use padoca_core::{ProductId, ProductSnapshot};

use crate::db::CatalogRepository;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::CartView;
use crate::models::session::{load_cart, save_cart};
use crate::state::AppState;

/// HTMX event fired after every cart change.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub product_id: String,
}

impl ProductForm {
    fn product_id(&self) -> Result<ProductId> {
        self.product_id
            .parse()
            .map_err(|_| AppError::BadRequest("invalid product id".to_string()))
    }
}

/// Cart drawer fragment ("Escolhidos da vez").
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
    pub open: bool,
}

/// Floating cart bar fragment (count and estimated total).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_bar.html")]
pub struct CartBarTemplate {
    pub cart: CartView,
}

/// Open the cart drawer.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartDrawerTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartDrawerTemplate {
        cart: CartView::from(&cart),
        open: true,
    })
}

/// Add one unit of a product.
///
/// Only active products can be added; anything else is a 404.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let product_id = form.product_id()?;
    let product = CatalogRepository::new(state.pool())
        .active_product(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let mut cart = load_cart(&session).await?;
    cart.add(ProductSnapshot::from(&product));
    save_cart(&session, &cart).await?;

    add_breadcrumb("cart", "Added product", Some(&[("product", product.name.as_str())]));

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        CartBarTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Remove a product's line from the cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<ProductForm>) -> Result<Response> {
    let product_id = form.product_id()?;

    let mut cart = load_cart(&session).await?;
    if cart.remove(product_id) {
        save_cart(&session, &cart).await?;
    }

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        CartDrawerTemplate {
            cart: CartView::from(&cart),
            open: true,
        },
    )
        .into_response())
}

/// Empty the cart and close the drawer.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        CartDrawerTemplate {
            cart: CartView::from(&cart),
            open: false,
        },
    )
        .into_response())
}

/// Floating cart bar (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartBarTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartBarTemplate {
        cart: CartView::from(&cart),
    })
}
