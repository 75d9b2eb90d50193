//! Browsing the menu: tabs, featured items, category listings and search.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use padoca_core::catalog::FEATURED_TAB_ID;
use padoca_core::{MenuListing, MenuSelection, Product};
use padoca_integration_tests::{category, names, product};

struct Menu {
    categories: Vec<padoca_core::Category>,
    products: Vec<Product>,
}

fn menu() -> Menu {
    let paes = category("Pães Artesanais", 1);
    let cafes = category("Cafés", 2);

    let mut baguete = product("Baguete Francesa", &paes, 990, None);
    baguete.description = "Clássica baguete francesa de casca crocante.".to_string();
    baguete.is_featured = true;

    let mut focaccia = product("Focaccia de Alecrim", &paes, 1800, Some("https://cdn/focaccia.png"));
    focaccia.is_featured = true;

    let mut affogato = product("Affogato", &cafes, 1900, None);
    affogato.description = "Espresso quente sobre sorvete de baunilha.".to_string();

    let espresso = product("Espresso Tônico", &cafes, 1600, Some("https://cdn/tonico.png"));

    Menu {
        categories: vec![paes, cafes],
        products: vec![baguete, focaccia, affogato, espresso],
    }
}

#[test]
fn test_default_tab_lists_featured_with_images_first() {
    let menu = menu();
    let listing = MenuListing::build(
        &menu.categories,
        &menu.products,
        MenuSelection::from_param(None),
        None,
    );

    assert_eq!(listing.heading, "⭐ Os Queridinhos");
    assert_eq!(
        names(&listing.products),
        ["Focaccia de Alecrim", "Baguete Francesa"]
    );
    assert!(!listing.is_search);

    let tab_names: Vec<&str> = listing.tabs.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tab_names, ["Queridinhos", "Pães Artesanais", "Cafés"]);
    assert!(listing.tabs[0].active);
    assert_eq!(listing.tabs[0].param, FEATURED_TAB_ID);
}

#[test]
fn test_category_tab_round_trips_through_query_param() {
    let menu = menu();
    let cafes = &menu.categories[1];
    let param = MenuSelection::Category(cafes.id).param();

    let listing = MenuListing::build(
        &menu.categories,
        &menu.products,
        MenuSelection::from_param(Some(&param)),
        None,
    );

    assert_eq!(listing.heading, "Cafés");
    assert_eq!(names(&listing.products), ["Espresso Tônico", "Affogato"]);
    assert!(listing.tabs.iter().any(|t| t.active && t.param == param));
}

#[test]
fn test_unknown_tab_falls_back_to_featured() {
    let menu = menu();
    let listing = MenuListing::build(
        &menu.categories,
        &menu.products,
        MenuSelection::from_param(Some("not-a-category")),
        None,
    );
    assert_eq!(listing.heading, "⭐ Os Queridinhos");
}

#[test]
fn test_search_matches_descriptions_across_categories() {
    let menu = menu();
    let cafes = &menu.categories[1];
    let listing = MenuListing::build(
        &menu.categories,
        &menu.products,
        MenuSelection::Category(cafes.id),
        Some("  BAUNILHA "),
    );

    assert!(listing.is_search);
    assert_eq!(listing.heading, "Resultados da busca");
    assert_eq!(names(&listing.products), ["Affogato"]);
}

#[test]
fn test_search_without_hits_shows_message() {
    let menu = menu();
    let listing = MenuListing::build(
        &menu.categories,
        &menu.products,
        MenuSelection::Featured,
        Some("pizza"),
    );
    assert!(listing.products.is_empty());
    assert_eq!(listing.empty_message, "Nenhum item encontrado.");
}

#[test]
fn test_blank_search_keeps_tab_listing() {
    let menu = menu();
    let listing = MenuListing::build(
        &menu.categories,
        &menu.products,
        MenuSelection::Featured,
        Some("   "),
    );
    assert!(!listing.is_search);
    assert_eq!(listing.products.len(), 2);
}
