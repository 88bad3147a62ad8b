//! The product detail controller.
//!
//! A small state machine: every load passes through `Loading` and resolves
//! to either `Loaded` (selections defaulted from the entity) or `Absent`.
//! Resolutions carry a generation ticket so that a lookup superseded by a
//! newer one can never overwrite state after the fact.

use serde::{Deserialize, Serialize};
use vitrine_catalog::{CatalogSource, Product, ProductId};

/// Where a detail load currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    /// A lookup is in flight; render the skeleton.
    #[default]
    Loading,
    /// The product was found; render the full detail view.
    Loaded(Product),
    /// No product matched the identifier; render the not-found message.
    Absent,
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, LoadPhase::Absent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPhase::Loading => "loading",
            LoadPhase::Loaded(_) => "loaded",
            LoadPhase::Absent => "absent",
        }
    }
}

/// Transient selection state on the detail surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected gallery image reference.
    pub image: String,
    /// Selected color, or empty when the product offers none.
    pub color: String,
    /// Selected size, or empty when the product offers none.
    pub size: String,
    /// Chosen quantity, never below 1.
    pub quantity: i64,
}

impl Selection {
    /// Initial selections for a freshly loaded product: first gallery image
    /// (falling back to the primary image), first color, first size.
    pub fn defaults_for(product: &Product) -> Self {
        Self {
            image: product.default_gallery_image().to_string(),
            color: product.default_color().to_string(),
            size: product.default_size().to_string(),
            quantity: 1,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            image: String::new(),
            color: String::new(),
            size: String::new(),
            quantity: 1,
        }
    }
}

/// Proof of a started load. A resolution is applied only while its ticket's
/// generation is still current; anything older is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    target: ProductId,
    generation: u64,
}

impl LoadTicket {
    /// The identifier this ticket was issued for.
    pub fn target(&self) -> ProductId {
        self.target
    }
}

/// Detail view state: the loaded product plus its transient selections.
pub struct DetailFlow<S> {
    source: S,
    phase: LoadPhase,
    selection: Selection,
    generation: u64,
}

impl<S: CatalogSource> DetailFlow<S> {
    /// Create a detail flow over a catalog source. Starts in `Loading`,
    /// since a detail surface always exists for some identifier about to
    /// be looked up.
    pub fn new(source: S) -> Self {
        Self {
            source,
            phase: LoadPhase::Loading,
            selection: Selection::default(),
            generation: 0,
        }
    }

    /// Look up `id` and resolve the phase. A source failure degrades to
    /// `Absent`, the only recoverable shape the surface has.
    pub async fn load(&mut self, id: ProductId) {
        let ticket = self.begin_load(id);
        let outcome = match self.source.product(id).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(%id, error = %err, "detail lookup failed");
                None
            }
        };
        self.resolve(ticket, outcome);
    }

    /// Start a load: enter `Loading`, reset selections, and issue a ticket
    /// for the resolution. Starting a newer load strands every earlier
    /// ticket.
    pub fn begin_load(&mut self, id: ProductId) -> LoadTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.selection = Selection::default();
        tracing::debug!(%id, generation = self.generation, "detail load started");
        LoadTicket {
            target: id,
            generation: self.generation,
        }
    }

    /// Apply a lookup outcome. Returns `false` (leaving all state alone)
    /// when the ticket is stale, i.e. a newer `begin_load` has happened
    /// since it was issued.
    pub fn resolve(&mut self, ticket: LoadTicket, outcome: Option<Product>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                id = %ticket.target,
                stale = ticket.generation,
                current = self.generation,
                "discarding stale detail resolution"
            );
            return false;
        }

        match outcome {
            Some(product) => {
                self.selection = Selection::defaults_for(&product);
                self.phase = LoadPhase::Loaded(product);
            }
            None => {
                self.selection = Selection::default();
                self.phase = LoadPhase::Absent;
            }
        }
        true
    }

    /// The current phase.
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// The loaded product, if the flow is in the `Loaded` phase.
    pub fn product(&self) -> Option<&Product> {
        match &self.phase {
            LoadPhase::Loaded(product) => Some(product),
            _ => None,
        }
    }

    /// The current selections.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select a gallery image. Values are taken as-is; the gallery only
    /// offers references drawn from the product itself.
    pub fn select_image(&mut self, image: impl Into<String>) {
        self.selection.image = image.into();
    }

    /// Select a color.
    pub fn select_color(&mut self, color: impl Into<String>) {
        self.selection.color = color.into();
    }

    /// Select a size.
    pub fn select_size(&mut self, size: impl Into<String>) {
        self.selection.size = size.into();
    }

    /// Set the quantity, clamped to a minimum of 1. There is no maximum.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.selection.quantity = quantity.max(1);
    }

    /// Step the quantity up by one.
    pub fn increment_quantity(&mut self) {
        self.selection.quantity += 1;
    }

    /// Step the quantity down by one, stopping at 1.
    pub fn decrement_quantity(&mut self) {
        self.selection.quantity = (self.selection.quantity - 1).max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vitrine_catalog::demo::demo_catalog;
    use vitrine_catalog::MemoryCatalog;

    fn flow() -> DetailFlow<MemoryCatalog> {
        let source = MemoryCatalog::new(demo_catalog()).with_latency(Duration::ZERO);
        DetailFlow::new(source)
    }

    fn demo_product(id: u64) -> Product {
        demo_catalog()
            .into_iter()
            .find(|p| p.id == ProductId::new(id))
            .unwrap()
    }

    #[tokio::test]
    async fn test_load_found_defaults_selections() {
        let mut flow = flow();
        flow.load(ProductId::new(1)).await;

        let product = flow.product().expect("product 1 loads");
        assert_eq!(product.name, "Premium Wireless Headphones");

        let selection = flow.selection();
        assert_eq!(selection.image, product.images[0]);
        assert_eq!(selection.color, "black");
        assert_eq!(selection.size, "One Size");
        assert_eq!(selection.quantity, 1);
    }

    #[tokio::test]
    async fn test_load_missing_resolves_absent() {
        let mut flow = flow();
        flow.load(ProductId::new(999)).await;

        assert!(flow.phase().is_absent());
        assert!(flow.product().is_none());
    }

    #[tokio::test]
    async fn test_reload_resets_selections() {
        let mut flow = flow();
        flow.load(ProductId::new(1)).await;
        flow.select_color("blue");
        flow.set_quantity(7);

        flow.load(ProductId::new(2)).await;
        let selection = flow.selection();
        assert_eq!(selection.color, "white");
        assert_eq!(selection.quantity, 1);
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let mut flow = flow();

        let first = flow.begin_load(ProductId::new(2));
        let second = flow.begin_load(ProductId::new(5));
        assert_eq!(first.target(), ProductId::new(2));

        // The older lookup lands first and must not apply.
        assert!(!flow.resolve(first, Some(demo_product(2))));
        assert!(flow.phase().is_loading());

        assert!(flow.resolve(second, Some(demo_product(5))));
        assert_eq!(flow.product().unwrap().id, ProductId::new(5));
    }

    #[test]
    fn test_stale_resolution_after_newer_applied() {
        let mut flow = flow();

        let first = flow.begin_load(ProductId::new(2));
        let second = flow.begin_load(ProductId::new(5));

        assert!(flow.resolve(second, Some(demo_product(5))));
        // The older lookup resolves late; state stays at product 5.
        assert!(!flow.resolve(first, Some(demo_product(2))));
        assert_eq!(flow.product().unwrap().id, ProductId::new(5));
    }

    #[test]
    fn test_begin_load_enters_loading() {
        let mut flow = flow();
        let ticket = flow.begin_load(ProductId::new(3));

        assert!(flow.phase().is_loading());
        assert!(flow.resolve(ticket, None));
        assert!(flow.phase().is_absent());
    }

    #[test]
    fn test_quantity_lower_bound() {
        let mut flow = flow();

        flow.decrement_quantity();
        assert_eq!(flow.selection().quantity, 1);

        flow.set_quantity(0);
        assert_eq!(flow.selection().quantity, 1);

        flow.set_quantity(-5);
        assert_eq!(flow.selection().quantity, 1);
    }

    #[test]
    fn test_quantity_stepper() {
        let mut flow = flow();

        flow.increment_quantity();
        flow.increment_quantity();
        assert_eq!(flow.selection().quantity, 3);

        flow.decrement_quantity();
        assert_eq!(flow.selection().quantity, 2);

        flow.set_quantity(40);
        assert_eq!(flow.selection().quantity, 40);
    }

    #[test]
    fn test_selection_setters_overwrite() {
        let mut flow = flow();
        flow.select_image("alt.jpg");
        flow.select_color("teal");
        flow.select_size("XL");

        let selection = flow.selection();
        assert_eq!(selection.image, "alt.jpg");
        assert_eq!(selection.color, "teal");
        assert_eq!(selection.size, "XL");
    }

    #[tokio::test]
    async fn test_product_without_options_defaults_empty() {
        let mut flow = flow();
        // Product 4 offers colors but no sizes.
        flow.load(ProductId::new(4)).await;

        let selection = flow.selection();
        assert_eq!(selection.color, "white");
        assert_eq!(selection.size, "");
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(LoadPhase::Loading.as_str(), "loading");
        assert_eq!(LoadPhase::Absent.as_str(), "absent");
        assert_eq!(LoadPhase::Loaded(demo_product(1)).as_str(), "loaded");
    }
}
