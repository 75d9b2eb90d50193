//! Cross-crate tests for the Padoca digital menu.
//!
//! These tests drive the domain library and the admin seed/storage helpers
//! together, without a database or network.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p padoca-integration-tests
//! ```
//!
//! # Test Files
//!
//! - `menu_browsing` - Tabs, search and image-first ordering on a seeded menu
//! - `cart_session` - Cart built from listed products, as stored in the session
//! - `store_status` - Open/closed indicator across timezones
//! - `menu_seed` - The sample `menu.yaml` at the repository root
//! - `admin_forms` - Back-office input validation

use padoca_core::{Category, CategoryId, Price, Product, ProductId};

/// A category with a fresh ID.
#[must_use]
pub fn category(name: &str, order: i32) -> Category {
    Category {
        id: CategoryId::new_v4(),
        name: name.to_string(),
        active: true,
        order,
    }
}

/// An active, non-featured product priced in centavos.
#[must_use]
pub fn product(name: &str, category: &Category, centavos: i64, image: Option<&str>) -> Product {
    Product {
        id: ProductId::new_v4(),
        category_id: category.id,
        name: name.to_string(),
        description: String::new(),
        price: Price::from_centavos(centavos),
        image_url: image.map(String::from),
        active: true,
        is_featured: false,
    }
}

/// Names of `products`, in order.
#[must_use]
pub fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}
