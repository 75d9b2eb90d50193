//! Template view models.
//!
//! Templates only see strings and flags; prices are formatted here.

use serde::Serialize;

use padoca_core::{Cart, CartLine, MenuListing, MenuTab, Product, StoreHours, StoreStatus};

/// A product as shown on a menu card.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image_url: product
                .has_image()
                .then(|| product.image_url.clone())
                .flatten(),
        }
    }
}

/// The tab scroller plus the product grid.
#[derive(Debug, Clone)]
pub struct MenuView {
    pub tabs: Vec<MenuTab>,
    pub heading: String,
    pub products: Vec<ProductCard>,
    pub is_search: bool,
    pub empty_message: &'static str,
    /// Current search text, echoed back into the search box.
    pub query: String,
}

impl MenuView {
    #[must_use]
    pub fn new(listing: MenuListing, query: Option<&str>) -> Self {
        Self {
            products: listing.products.iter().map(ProductCard::from).collect(),
            tabs: listing.tabs,
            heading: listing.heading,
            is_search: listing.is_search,
            empty_message: listing.empty_message,
            query: query.unwrap_or_default().trim().to_string(),
        }
    }
}

/// One line of the cart drawer.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image_url: Option<String>,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id.to_string(),
            name: line.product.name.clone(),
            quantity: line.quantity,
            unit_price: line.product.price.to_string(),
            line_total: line.line_total().to_string(),
            image_url: line.product.image_url.clone(),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub total: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            item_count: cart.item_count(),
            total: cart.total().to_string(),
        }
    }
}

/// The open/closed badge, also served as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    pub open: bool,
    pub label: &'static str,
    pub open_time: String,
    pub close_time: String,
    pub is_open_today: bool,
}

impl StatusView {
    /// Build the view from the evaluated status and the record it came from.
    ///
    /// When no record exists the default hours are reported.
    #[must_use]
    pub fn new(status: StoreStatus, hours: Option<&StoreHours>) -> Self {
        let hours = hours.copied().unwrap_or_default();
        Self {
            open: status.is_open(),
            label: status.label(),
            open_time: hours.open_time.to_string(),
            close_time: hours.close_time.to_string(),
            is_open_today: hours.is_open_today,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use padoca_core::{CategoryId, Price, ProductId, ProductSnapshot};

    use super::*;

    fn product(image_url: Option<&str>) -> Product {
        Product {
            id: ProductId::new_v4(),
            category_id: CategoryId::new_v4(),
            name: "Sonho".to_string(),
            description: "Recheado de doce de leite".to_string(),
            price: Price::from_centavos(750),
            image_url: image_url.map(String::from),
            active: true,
            is_featured: true,
        }
    }

    #[test]
    fn test_product_card_formats_price() {
        let card = ProductCard::from(&product(None));
        assert_eq!(card.price, "R$ 7,50");
        assert!(card.image_url.is_none());
    }

    #[test]
    fn test_product_card_drops_blank_image() {
        assert!(ProductCard::from(&product(Some(" "))).image_url.is_none());
        assert_eq!(
            ProductCard::from(&product(Some("https://x/s.png"))).image_url.as_deref(),
            Some("https://x/s.png")
        );
    }

    #[test]
    fn test_cart_view_totals() {
        let p = product(None);
        let mut cart = Cart::new();
        cart.add(ProductSnapshot::from(&p));
        cart.add(ProductSnapshot::from(&p));
        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.total, "R$ 15,00");
        assert_eq!(view.lines[0].line_total, "R$ 15,00");
        assert_eq!(view.lines[0].unit_price, "R$ 7,50");
    }

    #[test]
    fn test_status_view_json() {
        let view = StatusView::new(StoreStatus::Open, None);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["open"], true);
        assert_eq!(json["label"], "Aberto");
        assert_eq!(json["openTime"], "08:00");
        assert_eq!(json["closeTime"], "22:00");
        assert_eq!(json["isOpenToday"], true);
    }
}
