//! Sort modes for the product listing.

use serde::{Deserialize, Serialize};

/// Sort modes offered by the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Curated catalog order (no reordering).
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLowToHigh,
    /// Sort by price, high to low.
    PriceHighToLow,
    /// Sort by highest rated.
    Rating,
    /// Sort by newest first (larger identifier = more recently added).
    Newest,
}

impl SortMode {
    /// All modes, in the order the filter panel offers them.
    pub fn all() -> [SortMode; 5] {
        [
            SortMode::Featured,
            SortMode::PriceLowToHigh,
            SortMode::PriceHighToLow,
            SortMode::Rating,
            SortMode::Newest,
        ]
    }

    /// Parse a sort token. Anything unrecognized behaves as `Featured`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "price-low" => SortMode::PriceLowToHigh,
            "price-high" => SortMode::PriceHighToLow,
            "rating" => SortMode::Rating,
            "newest" => SortMode::Newest,
            _ => SortMode::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::PriceLowToHigh => "price-low",
            SortMode::PriceHighToLow => "price-high",
            SortMode::Rating => "rating",
            SortMode::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Featured => "Featured",
            SortMode::PriceLowToHigh => "Price: Low to High",
            SortMode::PriceHighToLow => "Price: High to Low",
            SortMode::Rating => "Rating",
            SortMode::Newest => "Newest",
        }
    }
}
