//! The sample menu shipped at the repository root.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use padoca_admin::seed::{parse_config, validate_config};
use padoca_admin::storage::naming::{content_type_for, extension, object_name};
use padoca_core::Price;

const SAMPLE_MENU: &str = include_str!("../../../menu.yaml");

#[test]
fn test_sample_menu_is_valid() {
    let config = parse_config(SAMPLE_MENU).unwrap();
    assert!(validate_config(&config).is_empty());

    let names: Vec<&str> = config.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["Pães Artesanais", "Doces & Bolos", "Cafés", "Bebidas Geladas"]
    );

    let product_count: usize = config.categories.iter().map(|c| c.products.len()).sum();
    assert_eq!(product_count, 24);
}

#[test]
fn test_sample_menu_orders_and_prices() {
    let config = parse_config(SAMPLE_MENU).unwrap();

    let orders: Vec<i32> = config.categories.iter().map(|c| c.order).collect();
    assert_eq!(orders, [1, 2, 3, 4]);

    let baguete = &config.categories[0].products[0];
    assert_eq!(baguete.name, "Baguete Francesa");
    assert_eq!(baguete.price.parse().unwrap(), Price::from_centavos(990));
    assert!(baguete.image.is_none());
    assert!(baguete.active);
    assert!(!baguete.featured);
}

#[test]
fn test_photo_object_names() {
    let name = object_name(Some("Baguete.JPEG"), None);
    let (stem, ext) = name.rsplit_once('.').unwrap();
    assert_eq!(ext, "jpeg");
    assert_eq!(content_type_for(ext), "image/jpeg");

    let (millis, suffix) = stem.split_once('-').unwrap();
    assert!(millis.parse::<i64>().is_ok());
    assert_eq!(suffix.len(), 7);

    assert_eq!(extension(None, Some("image/webp")), "webp");
    assert_eq!(extension(None, None), "png");
}
