//! Menu page and product grid.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use padoca_core::{MenuListing, MenuSelection};

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::filters;
use crate::models::session::{current_customer, load_cart};
use crate::models::{CartView, MenuView, StatusView};
use crate::routes::status::current_status;
use crate::state::AppState;

/// Query parameters shared by the page and the fragment.
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// `featured` (default) or a category UUID.
    pub category: Option<String>,
    /// Free-text search.
    pub q: Option<String>,
}

/// Full menu page.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub logo_url: Option<String>,
    pub status: StatusView,
    pub customer_first_name: Option<String>,
    pub menu: MenuView,
    pub cart: CartView,
}

/// Tabs plus product grid fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/menu.html")]
pub struct MenuTemplate {
    pub menu: MenuView,
}

/// Load the active menu and build the view for a query.
async fn load_menu(state: &AppState, query: &MenuQuery) -> Result<MenuView> {
    let repo = CatalogRepository::new(state.pool());
    let (categories, products) = tokio::try_join!(repo.active_categories(), repo.active_products())?;

    let selection = MenuSelection::from_param(query.category.as_deref());
    let listing = MenuListing::build(&categories, &products, selection, query.q.as_deref());
    Ok(MenuView::new(listing, query.q.as_deref()))
}

/// Display the menu page.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MenuQuery>,
) -> Result<HomeTemplate> {
    let menu = load_menu(&state, &query).await?;
    let cart = load_cart(&session).await?;
    let customer = current_customer(&session).await?;
    let status = current_status(&state).await;

    Ok(HomeTemplate {
        logo_url: state.logo_url().map(String::from),
        status,
        customer_first_name: customer.map(|c| c.name.first_name().to_string()),
        menu,
        cart: CartView::from(&cart),
    })
}

/// Product grid fragment for tab switches and search.
#[instrument(skip(state))]
pub async fn menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<MenuTemplate> {
    Ok(MenuTemplate {
        menu: load_menu(&state, &query).await?,
    })
}
