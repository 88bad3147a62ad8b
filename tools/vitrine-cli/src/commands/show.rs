//! `vitrine show` - the detail surface on stdout.

use anyhow::Result;
use clap::Args;
use std::time::Duration;
use vitrine_browse::{DetailFlow, LoadPhase};
use vitrine_catalog::demo::demo_catalog;
use vitrine_catalog::{CatalogError, MemoryCatalog, ProductId};
use vitrine_ui::{render_detail, render_not_found};

use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product identifier
    pub id: ProductId,

    /// Emit the rendered HTML surface instead of a summary
    #[arg(long)]
    pub html: bool,

    /// Simulated source latency in milliseconds
    #[arg(long, default_value_t = 500)]
    pub latency_ms: u64,
}

pub async fn run(args: ShowArgs, output: &Output) -> Result<()> {
    let source = MemoryCatalog::new(demo_catalog())
        .with_latency(Duration::from_millis(args.latency_ms));
    let mut flow = DetailFlow::new(source);

    flow.load(args.id).await;

    match flow.phase() {
        LoadPhase::Loaded(product) => {
            if output.is_json() {
                output.json(product);
                return Ok(());
            }

            if args.html {
                output.raw(&render_detail(product, flow.selection()));
                return Ok(());
            }

            output.header(&product.name);
            output.kv("id", &product.id.to_string());
            output.kv("category", product.category.as_str());
            output.kv("price", &product.price.display());
            if let Some(original) = product.original_price {
                output.kv("was", &original.display());
            }
            if let Some(discount) = product.discount_percent {
                output.kv("discount", &format!("{}%", discount));
            }
            output.kv(
                "rating",
                &format!("{:.1} ({} reviews)", product.rating, product.review_count),
            );
            if !product.colors.is_empty() {
                output.kv("colors", &product.colors.join(", "));
            }
            if !product.sizes.is_empty() {
                output.kv("sizes", &product.sizes.join(", "));
            }
            if let Some(description) = &product.description {
                output.kv("about", description);
            }
            let selection = flow.selection();
            output.kv(
                "selected",
                &format!(
                    "color={} size={} quantity={}",
                    selection.color, selection.size, selection.quantity
                ),
            );
            Ok(())
        }
        LoadPhase::Absent => {
            if args.html {
                output.raw(&render_not_found());
                return Ok(());
            }
            Err(CatalogError::ProductNotFound(args.id).into())
        }
        LoadPhase::Loading => unreachable!("load() always resolves the phase"),
    }
}
