//! `vitrine categories` - list the filterable categories.

use anyhow::Result;
use vitrine_browse::Listing;
use vitrine_catalog::demo::demo_catalog;

use crate::output::Output;

pub async fn run(output: &Output) -> Result<()> {
    let listing = Listing::new(demo_catalog());
    let categories = listing.categories();

    if output.is_json() {
        output.json(&categories);
        return Ok(());
    }

    output.header("Categories");
    for category in &categories {
        let count = listing
            .source()
            .iter()
            .filter(|p| p.category == *category)
            .count();
        output.kv(category.as_str(), &format!("{} products", count));
    }

    Ok(())
}
