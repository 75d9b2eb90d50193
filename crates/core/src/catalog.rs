//! Menu catalog: categories, products, and how the storefront lists them.

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, Price, ProductId};

/// Name of the featured pseudo-category tab.
pub const FEATURED_TAB_NAME: &str = "Queridinhos";

/// Query-string value selecting the featured tab.
pub const FEATURED_TAB_ID: &str = "featured";

/// A menu section ("Pães Artesanais", "Cafés", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub active: bool,
    /// Plain integer sort key, ascending.
    #[cfg_attr(feature = "postgres", sqlx(rename = "sort_order"))]
    pub order: i32,
}

/// A menu item.
///
/// `category_id` is a soft reference: the category may have been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image_url: Option<String>,
    pub active: bool,
    pub is_featured: bool,
}

impl Product {
    /// True when the product has a non-blank image URL.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Case-insensitive match on name or description.
    #[must_use]
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

/// Order products so that those with an image come first.
///
/// The sort is stable: relative order is preserved among products that
/// both have, or both lack, an image.
pub fn sort_by_image(products: &mut [Product]) {
    products.sort_by_key(|p| !p.has_image());
}

fn sorted(mut products: Vec<Product>) -> Vec<Product> {
    sort_by_image(&mut products);
    products
}

/// Featured products, images first.
#[must_use]
pub fn featured(products: &[Product]) -> Vec<Product> {
    sorted(products.iter().filter(|p| p.is_featured).cloned().collect())
}

/// Products of one category, images first.
#[must_use]
pub fn in_category(products: &[Product], category_id: CategoryId) -> Vec<Product> {
    sorted(
        products
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect(),
    )
}

/// Products whose name or description contains `query`, images first.
#[must_use]
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    sorted(
        products
            .iter()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect(),
    )
}

/// Which tab of the menu is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuSelection {
    #[default]
    Featured,
    Category(CategoryId),
}

impl MenuSelection {
    /// Parse the `category` query parameter. Anything unrecognized selects
    /// the featured tab.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        param
            .filter(|p| *p != FEATURED_TAB_ID)
            .and_then(|p| p.parse().ok())
            .map_or(Self::Featured, Self::Category)
    }

    /// Value to put back in the query string.
    #[must_use]
    pub fn param(&self) -> String {
        match self {
            Self::Featured => FEATURED_TAB_ID.to_string(),
            Self::Category(id) => id.to_string(),
        }
    }
}

/// One entry of the horizontal category scroller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTab {
    /// `featured` or the category UUID.
    pub param: String,
    pub name: String,
    pub active: bool,
}

/// What the storefront shows for a given selection and search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuListing {
    pub tabs: Vec<MenuTab>,
    pub heading: String,
    pub products: Vec<Product>,
    pub is_search: bool,
    pub empty_message: &'static str,
}

impl MenuListing {
    /// Build the listing.
    ///
    /// A non-blank `query` switches to search mode and hides the tab
    /// selection; otherwise the selected tab's products are listed.
    #[must_use]
    pub fn build(
        categories: &[Category],
        products: &[Product],
        selection: MenuSelection,
        query: Option<&str>,
    ) -> Self {
        let tabs = std::iter::once(MenuTab {
            param: FEATURED_TAB_ID.to_string(),
            name: FEATURED_TAB_NAME.to_string(),
            active: selection == MenuSelection::Featured,
        })
        .chain(categories.iter().map(|c| MenuTab {
            param: c.id.to_string(),
            name: c.name.clone(),
            active: selection == MenuSelection::Category(c.id),
        }))
        .collect();

        if let Some(q) = query.map(str::trim).filter(|q| !q.is_empty()) {
            return Self {
                tabs,
                heading: "Resultados da busca".to_string(),
                products: search(products, q),
                is_search: true,
                empty_message: "Nenhum item encontrado.",
            };
        }

        let (heading, listed) = match selection {
            MenuSelection::Featured => ("⭐ Os Queridinhos".to_string(), featured(products)),
            MenuSelection::Category(id) => (
                categories
                    .iter()
                    .find(|c| c.id == id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
                in_category(products, id),
            ),
        };

        Self {
            tabs,
            heading,
            products: listed,
            is_search: false,
            empty_message: "Nenhum item nesta categoria.",
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn category(name: &str, order: i32) -> Category {
        Category {
            id: CategoryId::new_v4(),
            name: name.to_string(),
            active: true,
            order,
        }
    }

    pub fn product(name: &str, category: &Category, image: Option<&str>) -> Product {
        Product {
            id: ProductId::new_v4(),
            category_id: category.id,
            name: name.to_string(),
            description: String::new(),
            price: Price::from_centavos(1000),
            image_url: image.map(String::from),
            active: true,
            is_featured: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{category, product};
    use super::*;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_has_image_ignores_blank() {
        let c = category("Pães", 1);
        assert!(product("a", &c, Some("https://x/a.png")).has_image());
        assert!(!product("b", &c, Some("  ")).has_image());
        assert!(!product("c", &c, None).has_image());
    }

    #[test]
    fn test_sort_by_image_is_stable() {
        let c = category("Pães", 1);
        let mut products = vec![
            product("no-1", &c, None),
            product("img-1", &c, Some("https://x/1.png")),
            product("no-2", &c, Some("")),
            product("img-2", &c, Some("https://x/2.png")),
            product("no-3", &c, None),
        ];
        sort_by_image(&mut products);
        assert_eq!(names(&products), ["img-1", "img-2", "no-1", "no-2", "no-3"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_description() {
        let c = category("Cafés", 1);
        let mut latte = product("Flat White", &c, None);
        latte.description = "Expresso duplo com LEITE vaporizado".to_string();
        let bread = product("Pão Italiano", &c, None);
        let found = search(&[latte, bread], "leite");
        assert_eq!(names(&found), ["Flat White"]);
    }

    #[test]
    fn test_selection_from_param() {
        let id = CategoryId::new_v4();
        assert_eq!(MenuSelection::from_param(None), MenuSelection::Featured);
        assert_eq!(MenuSelection::from_param(Some("featured")), MenuSelection::Featured);
        assert_eq!(MenuSelection::from_param(Some("bogus")), MenuSelection::Featured);
        assert_eq!(
            MenuSelection::from_param(Some(&id.to_string())),
            MenuSelection::Category(id)
        );
    }

    #[test]
    fn test_listing_featured_tab_first() {
        let breads = category("Pães", 1);
        let cakes = category("Doces", 2);
        let listing = MenuListing::build(
            &[breads.clone(), cakes],
            &[],
            MenuSelection::Featured,
            None,
        );
        let tab_names: Vec<&str> = listing.tabs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(tab_names, ["Queridinhos", "Pães", "Doces"]);
        assert!(listing.tabs[0].active);
        assert_eq!(listing.heading, "⭐ Os Queridinhos");
        assert_eq!(listing.empty_message, "Nenhum item nesta categoria.");
    }

    #[test]
    fn test_listing_category_selection() {
        let breads = category("Pães", 1);
        let cakes = category("Doces", 2);
        let products = vec![
            product("Baguete", &breads, None),
            product("Pudim", &cakes, None),
            product("Focaccia", &breads, Some("https://x/f.png")),
        ];
        let listing = MenuListing::build(
            &[breads.clone(), cakes],
            &products,
            MenuSelection::Category(breads.id),
            None,
        );
        assert_eq!(listing.heading, "Pães");
        assert_eq!(names(&listing.products), ["Focaccia", "Baguete"]);
        assert!(listing.tabs[1].active);
        assert!(!listing.tabs[0].active);
    }

    #[test]
    fn test_listing_search_overrides_selection() {
        let breads = category("Pães", 1);
        let mut featured_bread = product("Baguete", &breads, None);
        featured_bread.is_featured = true;
        let other = product("Pudim", &breads, None);
        let listing = MenuListing::build(
            &[breads],
            &[featured_bread, other],
            MenuSelection::Featured,
            Some("  pud "),
        );
        assert!(listing.is_search);
        assert_eq!(listing.heading, "Resultados da busca");
        assert_eq!(names(&listing.products), ["Pudim"]);
        assert_eq!(listing.empty_message, "Nenhum item encontrado.");
    }

    #[test]
    fn test_blank_query_is_not_a_search() {
        let listing = MenuListing::build(&[], &[], MenuSelection::Featured, Some("   "));
        assert!(!listing.is_search);
    }
}
