//! Product entity.

use crate::ids::{Category, ProductId};
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Identifiers are unique and immutable within a catalog; derived views
/// always reference products by identifier, never by positional index, so
/// they stay stable under reordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Price,
    /// Original price, only meaningful when greater than `price`.
    #[serde(default)]
    pub original_price: Option<Price>,
    /// Discount percentage (0-100). Supplied independently of the prices;
    /// conventionally `round(100 * (1 - price/original))` but not enforced.
    #[serde(default)]
    pub discount_percent: Option<u8>,
    /// Category this product belongs to.
    pub category: Category,
    /// Average rating, conventionally 0-5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Primary image reference.
    pub image: String,
    /// Additional gallery image references, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Available colors, in display order.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Available sizes, in display order.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Stock flag, when the source provides one.
    #[serde(default)]
    pub in_stock: Option<bool>,
    /// Selling points shown on the detail surface.
    #[serde(default)]
    pub features: Vec<String>,
    /// Name/value detail pairs, in display order.
    #[serde(default)]
    pub details: Vec<DetailEntry>,
    /// Long-form description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Check if the product is on sale: an original price exists and is
    /// strictly greater than the current price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }

    /// The image the detail gallery starts on: first of the gallery
    /// sequence, falling back to the primary image.
    pub fn default_gallery_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or(&self.image)
    }

    /// Default color selection: first available color or empty.
    pub fn default_color(&self) -> &str {
        self.colors.first().map(String::as_str).unwrap_or("")
    }

    /// Default size selection: first available size or empty.
    pub fn default_size(&self) -> &str {
        self.sizes.first().map(String::as_str).unwrap_or("")
    }

    /// Check if any variant axis (color or size) is offered.
    pub fn has_variants(&self) -> bool {
        !self.colors.is_empty() || !self.sizes.is_empty()
    }
}

/// A name/value detail pair (e.g. `Brand: AudioMaster`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailEntry {
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    pub value: String,
}

impl DetailEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Test Product".to_string(),
            price: Price::from_cents(1999),
            original_price: None,
            discount_percent: None,
            category: Category::new("electronics"),
            rating: 4.0,
            review_count: 10,
            image: "primary.jpg".to_string(),
            images: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
            in_stock: None,
            features: Vec::new(),
            details: Vec::new(),
            description: None,
        }
    }

    #[test]
    fn test_on_sale_requires_higher_original() {
        let mut product = bare_product();
        assert!(!product.is_on_sale());

        product.original_price = Some(Price::from_cents(2499));
        assert!(product.is_on_sale());

        // An original at or below the price is not a sale.
        product.original_price = Some(Price::from_cents(1999));
        assert!(!product.is_on_sale());
    }

    #[test]
    fn test_default_gallery_image_falls_back_to_primary() {
        let mut product = bare_product();
        assert_eq!(product.default_gallery_image(), "primary.jpg");

        product.images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        assert_eq!(product.default_gallery_image(), "a.jpg");
    }

    #[test]
    fn test_default_selections() {
        let mut product = bare_product();
        assert_eq!(product.default_color(), "");
        assert_eq!(product.default_size(), "");
        assert!(!product.has_variants());

        product.colors = vec!["black".to_string(), "silver".to_string()];
        product.sizes = vec!["One Size".to_string()];
        assert_eq!(product.default_color(), "black");
        assert_eq!(product.default_size(), "One Size");
        assert!(product.has_variants());
    }
}
