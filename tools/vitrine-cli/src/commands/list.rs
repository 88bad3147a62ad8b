//! `vitrine list` - the listing surface on stdout.

use anyhow::Result;
use clap::Args;
use std::time::Duration;
use vitrine_browse::{Listing, SortMode};
use vitrine_catalog::demo::demo_catalog;
use vitrine_catalog::{CatalogSource, Category, MemoryCatalog};
use vitrine_ui::{render_card_grid, FilterPanel};

use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Filter by category (repeatable; toggles each named category on)
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Sort mode: featured, price-low, price-high, rating, newest
    #[arg(short, long, default_value = "featured")]
    pub sort: String,

    /// Emit the rendered HTML surface instead of a table
    #[arg(long)]
    pub html: bool,

    /// Simulated source latency in milliseconds
    #[arg(long, default_value_t = 0)]
    pub latency_ms: u64,
}

pub async fn run(args: ListArgs, output: &Output) -> Result<()> {
    let source = MemoryCatalog::new(demo_catalog())
        .with_latency(Duration::from_millis(args.latency_ms));
    let mut listing = Listing::new(source.list().await?);

    for category in &args.category {
        listing.toggle_category(Category::new(category.as_str()));
    }
    listing.set_sort(SortMode::from_str(&args.sort));

    let view = listing.visible();

    if output.is_json() {
        output.json(&view);
        return Ok(());
    }

    if args.html {
        let panel = FilterPanel::new();
        output.raw(&panel.render(
            &listing.categories(),
            listing.selected(),
            listing.sort(),
        ));
        output.raw(&render_card_grid(&view));
        return Ok(());
    }

    output.header(&format!(
        "Products ({}, sorted by {})",
        view.len(),
        listing.sort().display_name()
    ));

    if view.is_empty() {
        output.info("No products found. Try `vitrine list` without filters.");
        return Ok(());
    }

    for product in &view {
        let sale = match (product.original_price, product.discount_percent) {
            (Some(original), Some(discount)) => {
                format!(" (was {}, {}% off)", original.display(), discount)
            }
            _ => String::new(),
        };
        output.kv(
            &product.id.to_string(),
            &format!(
                "{} [{}] {}{} - {:.1}\u{2605} ({})",
                product.name,
                product.category,
                product.price.display(),
                sale,
                product.rating,
                product.review_count
            ),
        );
    }

    Ok(())
}
