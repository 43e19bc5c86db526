//! # Catalog
//!
//! The fixed product list shown on the home page, plus the header search.
//!
//! There is no data source: [`popular_products`] always returns the same
//! three products in the same order. The simulated network delay lives in
//! the application crate, this module stays synchronous.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// A product available in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: String,

    pub name: String,

    pub price: Money,

    pub image_url: String,

    /// Rating in tenths of a star, 0..=50 (45 = 4.5 stars).
    pub rating: u8,

    pub description: String,
}

impl Product {
    /// Rating as shown next to the stars, one decimal place.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::catalog::popular_products;
    ///
    /// assert_eq!(popular_products()[0].rating_label(), "4.5");
    /// ```
    pub fn rating_label(&self) -> String {
        format!("{}.{}", self.rating / 10, self.rating % 10)
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

fn product(id: &str, name: &str, price_cents: i64, image: &str, rating: u8, description: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_cents(price_cents),
        image_url: image.to_string(),
        rating,
        description: description.to_string(),
    }
}

/// The popular products featured on the home page, in display order.
pub fn popular_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Écouteurs Sans Fil Bluetooth",
            4999,
            "/products/earbuds.jpg",
            45,
            "Son haute qualité et autonomie longue durée.",
        ),
        product(
            "2",
            "Montre Connectée Sport",
            12999,
            "/products/smartwatch.jpg",
            47,
            "Suivi santé et notifications intelligentes.",
        ),
        product(
            "3",
            "Enceinte Bluetooth Portable",
            8999,
            "/products/speaker.jpg",
            43,
            "Puissante et résistante à l’eau.",
        ),
    ]
}

/// Filters products by a case-insensitive substring of name or description.
///
/// The query is trimmed first; an empty query returns every product.
/// Catalog order is preserved.
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();

    products
        .iter()
        .filter(|p| needle.is_empty() || p.matches(&needle))
        .collect()
}

/// Looks up a product by id.
pub fn find_product<'a>(products: &'a [Product], id: &str) -> CoreResult<&'a Product> {
    products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
}
