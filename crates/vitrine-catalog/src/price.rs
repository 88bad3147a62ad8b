//! Price type for catalog display.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues, and to make price ordering exact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display price.
///
/// Amounts are stored in cents. Formatting is fixed at two decimal places,
/// which is the only presentation the catalog needs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price {
    cents: i64,
}

impl Price {
    /// Create a price from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a price from a decimal amount.
    ///
    /// ```
    /// use vitrine_catalog::price::Price;
    /// let price = Price::from_decimal(199.99);
    /// assert_eq!(price.cents(), 19999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// Get the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Convert to a decimal amount.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Format as a display string with currency symbol, e.g. `$199.99`.
    pub fn display(&self) -> String {
        format!("${:.2}", self.to_decimal())
    }

    /// Format without the symbol, e.g. `199.99`.
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
