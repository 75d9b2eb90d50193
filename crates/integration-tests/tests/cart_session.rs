//! The "Escolhidos da vez" cart, built from menu products and stored in the
//! customer session as JSON.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use padoca_core::{Cart, Price, ProductSnapshot};
use padoca_integration_tests::{category, product};

#[test]
fn test_cart_totals_follow_snapshots() {
    let doces = category("Doces & Bolos", 2);
    let quindim = product("Quindim Tradicional", &doces, 750, None);
    let pudim = product("Pudim de Leite", &doces, 1200, Some("https://cdn/pudim.png"));

    let mut cart = Cart::new();
    cart.add(ProductSnapshot::from(&quindim));
    cart.add(ProductSnapshot::from(&pudim));
    cart.add(ProductSnapshot::from(&quindim));

    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.quantity_of(quindim.id), 2);
    assert_eq!(cart.total(), Price::from_centavos(2700));
    assert_eq!(cart.total().to_string(), "R$ 27,00");

    // Lines keep the order products were first added in.
    assert_eq!(cart.lines()[0].product.name, "Quindim Tradicional");
    assert_eq!(cart.lines()[0].line_total(), Price::from_centavos(1500));
}

#[test]
fn test_remove_and_clear() {
    let cafes = category("Cafés", 3);
    let pingado = product("Pingado", &cafes, 650, None);
    let irish = product("Irish Coffee", &cafes, 2700, None);

    let mut cart = Cart::new();
    cart.add(ProductSnapshot::from(&pingado));
    cart.add(ProductSnapshot::from(&irish));

    assert!(cart.remove(pingado.id));
    assert!(!cart.remove(pingado.id));
    assert_eq!(cart.total(), Price::from_centavos(2700));

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Price::zero());
}

#[test]
fn test_cart_survives_session_serialization() {
    let bebidas = category("Bebidas Geladas", 4);
    let suco = product("Suco Verde Detox", &bebidas, 1350, None);

    let mut cart = Cart::new();
    cart.add(ProductSnapshot::from(&suco));
    cart.add(ProductSnapshot::from(&suco));

    let json = serde_json::to_value(&cart).unwrap();
    let restored: Cart = serde_json::from_value(json).unwrap();
    assert_eq!(restored, cart);
    assert_eq!(restored.total(), Price::from_centavos(2700));
}

#[test]
fn test_snapshot_is_not_reconciled_with_menu() {
    let paes = category("Pães Artesanais", 1);
    let mut baguete = product("Baguete Francesa", &paes, 990, None);

    let mut cart = Cart::new();
    cart.add(ProductSnapshot::from(&baguete));

    baguete.price = Price::from_centavos(1290);
    assert_eq!(cart.total(), Price::from_centavos(990));
}
