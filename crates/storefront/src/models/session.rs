//! Session-stored customer state.
//!
//! Everything here is personalization or an ordering preview; none of it is
//! authenticated.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use padoca_core::types::customer::{SESSION_NAME_KEY, SESSION_UUID_KEY};
use padoca_core::{Cart, CustomerName, CustomerSessionId};

/// Session keys.
pub mod keys {
    /// The customer's cart.
    pub const CART: &str = "padoca_cart";

    pub use padoca_core::types::customer::{SESSION_NAME_KEY, SESSION_UUID_KEY};
}

/// The customer who completed the welcome prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentCustomer {
    pub id: CustomerSessionId,
    pub name: CustomerName,
}

/// Load the cart, or an empty one.
///
/// # Errors
///
/// Returns the session store error if the session cannot be read.
pub async fn load_cart(session: &Session) -> Result<Cart, tower_sessions::session::Error> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Persist the cart.
///
/// # Errors
///
/// Returns the session store error if the session cannot be written.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// The welcomed customer, if the prompt was completed in this session.
///
/// # Errors
///
/// Returns the session store error if the session cannot be read.
pub async fn current_customer(
    session: &Session,
) -> Result<Option<CurrentCustomer>, tower_sessions::session::Error> {
    let id = session.get::<CustomerSessionId>(SESSION_UUID_KEY).await?;
    let name = session.get::<CustomerName>(SESSION_NAME_KEY).await?;
    Ok(id.zip(name).map(|(id, name)| CurrentCustomer { id, name }))
}

/// Remember the welcomed customer.
///
/// # Errors
///
/// Returns the session store error if the session cannot be written.
pub async fn set_current_customer(
    session: &Session,
    customer: &CurrentCustomer,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(SESSION_UUID_KEY, customer.id).await?;
    session.insert(SESSION_NAME_KEY, &customer.name).await
}
