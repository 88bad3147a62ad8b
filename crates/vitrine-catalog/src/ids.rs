//! Newtype identifiers for catalog entities.
//!
//! Using newtypes prevents accidentally mixing up identifier kinds, e.g.
//! passing a raw quantity where a ProductId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A unique, stable product identifier.
///
/// Numeric on purpose: a larger identifier means a more recently added
/// product, which is the ordering the `newest` sort relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an identifier from its numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    /// Parse an identifier from a path parameter such as `/products/3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// A product category.
///
/// Categories form an open string-valued set: whatever the source list
/// carries is valid, nothing is enumerated up front.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-facing label, e.g. `home-office` renders as `home office`.
    pub fn display_name(&self) -> String {
        self.0.replace('-', " ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_value() {
        let id = ProductId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_product_id_ordering() {
        assert!(ProductId::new(6) > ProductId::new(2));
    }

    #[test]
    fn test_product_id_from_str() {
        let id: ProductId = "17".parse().unwrap();
        assert_eq!(id, ProductId::new(17));

        let padded: ProductId = " 3 ".parse().unwrap();
        assert_eq!(padded, ProductId::new(3));

        assert!("not-a-number".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_category_equality() {
        let a = Category::new("electronics");
        let b: Category = "electronics".into();
        let c = Category::new("clothing");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_category_display_name() {
        let cat = Category::new("home-office");
        assert_eq!(cat.display_name(), "home office");
    }
}
