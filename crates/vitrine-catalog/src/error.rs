//! Catalog error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur when reading from a catalog source.
///
/// Note that a missing product is NOT an error at the source boundary:
/// lookups return `Ok(None)` and the caller surfaces it as a recoverable,
/// user-visible state. `ProductNotFound` exists for callers that need to
/// convert that absence into a failure (e.g. the CLI exiting non-zero).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// The source could not be reached. Reserved for fetching providers;
    /// the in-memory catalog never produces it.
    #[error("catalog source unavailable: {0}")]
    SourceUnavailable(String),
}
