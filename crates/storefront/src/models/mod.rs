//! Storefront models.
//!
//! Domain types come from `padoca-core`; this module holds what the
//! storefront keeps in the session and the view models its templates render.

pub mod session;
pub mod view;

pub use session::{CurrentCustomer, keys as session_keys};
pub use view::{CartLineView, CartView, MenuView, ProductCard, StatusView};
