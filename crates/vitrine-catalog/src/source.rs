//! The catalog data source seam.
//!
//! Controllers depend on [`CatalogSource`], not on a concrete table, so the
//! in-memory demo catalog can later be swapped for a real data-fetching
//! collaborator without touching controller logic.

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::product::Product;
use async_trait::async_trait;
use std::time::Duration;

/// Read access to a product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// List every product, in catalog order.
    async fn list(&self) -> Result<Vec<Product>, CatalogError>;

    /// Look up a product by identifier. `Ok(None)` means not found.
    async fn product(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;
}

/// An in-memory catalog with simulated lookup latency.
///
/// The latency is the system's only suspension point; it stands in for the
/// round trip a real source would make.
pub struct MemoryCatalog {
    products: Vec<Product>,
    latency: Duration,
}

/// Default simulated lookup latency.
const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

impl MemoryCatalog {
    /// Create a catalog over a fixed product table.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency (zero is fine for tests).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        self.simulate_round_trip().await;
        tracing::debug!(count = self.products.len(), "catalog listed");
        Ok(self.products.clone())
    }

    async fn product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        self.simulate_round_trip().await;
        let found = self.products.iter().find(|p| p.id == id).cloned();
        tracing::debug!(%id, found = found.is_some(), "catalog lookup");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_catalog;

    fn instant_catalog() -> MemoryCatalog {
        MemoryCatalog::new(demo_catalog()).with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_list_returns_catalog_order() {
        let source = instant_catalog();
        let products = source.list().await.unwrap();

        assert_eq!(products.len(), 6);
        let ids: Vec<u64> = products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_lookup_found() {
        let source = instant_catalog();
        let product = source.product(ProductId::new(1)).await.unwrap();

        let product = product.expect("product 1 exists");
        assert_eq!(product.name, "Premium Wireless Headphones");
    }

    #[tokio::test]
    async fn test_lookup_missing() {
        let source = instant_catalog();
        let product = source.product(ProductId::new(999)).await.unwrap();
        assert!(product.is_none());
    }

    #[tokio::test]
    async fn test_lookup_waits_for_latency() {
        let source = MemoryCatalog::new(demo_catalog()).with_latency(Duration::from_millis(25));

        let start = std::time::Instant::now();
        let _ = source.product(ProductId::new(1)).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(25));
    }
}
