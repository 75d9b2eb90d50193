//! Session-local shopping cart ("Escolhidos da vez").
//!
//! The cart is an ordering preview only. Lines carry a snapshot of the
//! product taken when it was added and are never reconciled against the
//! live menu.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// The product fields a cart line needs to render itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

/// One product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: ProductSnapshot,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// An ordered list of cart lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line if the product is already in the cart,
    /// otherwise appends a new line with quantity 1.
    pub fn add(&mut self, product: ProductSnapshot) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Drop the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Estimated total ("Estimativa").
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Quantity of one product, 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map_or(0, |l| l.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(name: &str, centavos: i64) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new_v4(),
            name: name.to_string(),
            price: Price::from_centavos(centavos),
            image_url: None,
        }
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new();
        let croissant = snapshot("Croissant", 1250);
        cart.add(croissant.clone());
        cart.add(croissant.clone());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(croissant.id), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();
        let a = snapshot("A", 100);
        let b = snapshot("B", 100);
        cart.add(a.clone());
        cart.add(b);
        cart.add(a);
        let names: Vec<&str> = cart.lines().iter().map(|l| l.product.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_remove_only_that_product() {
        let mut cart = Cart::new();
        let a = snapshot("A", 100);
        let b = snapshot("B", 200);
        cart.add(a.clone());
        cart.add(a.clone());
        cart.add(b.clone());

        assert!(cart.remove(a.id));
        assert_eq!(cart.quantity_of(a.id), 0);
        assert_eq!(cart.quantity_of(b.id), 1);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(snapshot("A", 100));
        assert!(!cart.remove(ProductId::new_v4()));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_total_and_clear() {
        let mut cart = Cart::new();
        let coffee = snapshot("Espresso", 800);
        cart.add(coffee.clone());
        cart.add(coffee);
        cart.add(snapshot("Pudim", 1200));
        assert_eq!(cart.total(), Price::from_centavos(2800));
        assert_eq!(cart.total().to_string(), "R$ 28,00");

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::zero());
    }
}
