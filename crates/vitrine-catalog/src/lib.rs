//! Catalog domain types and data source for Vitrine.
//!
//! This crate provides the read side of a product catalog:
//!
//! - **Entities**: products with pricing, ratings, variant options, and
//!   detail attributes
//! - **Source**: the [`CatalogSource`] trait that controllers depend on,
//!   plus an in-memory implementation with simulated latency
//! - **Demo data**: the fixed catalog the demo surfaces browse
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_catalog::prelude::*;
//!
//! let source = MemoryCatalog::new(demo_catalog());
//! let products = source.list().await?;
//! let headphones = source.product(ProductId::new(1)).await?;
//! ```

pub mod demo;
pub mod error;
pub mod ids;
pub mod price;
pub mod product;
pub mod source;

pub use error::CatalogError;
pub use ids::{Category, ProductId};
pub use price::Price;
pub use product::{DetailEntry, Product};
pub use source::{CatalogSource, MemoryCatalog};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::demo::demo_catalog;
    pub use crate::error::CatalogError;
    pub use crate::ids::{Category, ProductId};
    pub use crate::price::Price;
    pub use crate::product::{DetailEntry, Product};
    pub use crate::source::{CatalogSource, MemoryCatalog};
}
