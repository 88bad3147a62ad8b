//! The product listing controller.
//!
//! Owns the full product set, the active category filter set, and the sort
//! mode. The rendered view is always recomputed from those three inputs by
//! [`derive_view`]; it is never stored beside them.

use crate::sort::SortMode;
use std::collections::BTreeSet;
use vitrine_catalog::{Category, Product};

/// Catalog view state: an immutable source list plus the filter and sort
/// intents applied to it.
#[derive(Debug, Clone)]
pub struct Listing {
    products: Vec<Product>,
    selected: BTreeSet<Category>,
    sort: SortMode,
}

impl Listing {
    /// Create a listing over a fixed source list. The list never changes
    /// for the lifetime of the controller.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            selected: BTreeSet::new(),
            sort: SortMode::Featured,
        }
    }

    /// The read-only source list, in catalog order.
    pub fn source(&self) -> &[Product] {
        &self.products
    }

    /// Unique categories of the source list, in first-seen source order.
    /// Feeds the filter panel.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = BTreeSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category.clone()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// The active category filter set.
    pub fn selected(&self) -> &BTreeSet<Category> {
        &self.selected
    }

    /// The active sort mode.
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Toggle a category filter: remove it when active, add it otherwise.
    /// A category that does not occur in the source list is ignored.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.products.iter().any(|p| p.category == category) {
            tracing::debug!(%category, "ignoring unknown category toggle");
            return;
        }
        if !self.selected.remove(&category) {
            self.selected.insert(category);
        }
    }

    /// Replace the sort mode.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    /// Clear the filter set and return the sort mode to `Featured`.
    pub fn reset_filters(&mut self) {
        self.selected.clear();
        self.sort = SortMode::Featured;
    }

    /// The derived view: the products to render, filtered and sorted.
    pub fn visible(&self) -> Vec<Product> {
        derive_view(&self.products, &self.selected, self.sort)
    }
}

/// Derive the rendered product sequence from the three listing inputs.
///
/// Pure and deterministic. An empty filter set means "no filtering", never
/// "exclude all". Sorting is stable, so products with equal keys keep their
/// post-filter relative order.
pub fn derive_view(
    source: &[Product],
    selected: &BTreeSet<Category>,
    sort: SortMode,
) -> Vec<Product> {
    let mut view: Vec<Product> = source
        .iter()
        .filter(|p| selected.is_empty() || selected.contains(&p.category))
        .cloned()
        .collect();

    match sort {
        SortMode::Featured => {}
        SortMode::PriceLowToHigh => view.sort_by_key(|p| p.price),
        SortMode::PriceHighToLow => view.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::Rating => view.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortMode::Newest => view.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    view
}
