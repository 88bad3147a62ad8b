//! Product card and grid renderers for the listing surface.

use crate::escape_html;
use crate::price_tag::render_price_tag;
use crate::rating::render_rating;
use vitrine_catalog::Product;

/// Render one product card.
pub fn render_card(product: &Product) -> String {
    let discount_badge = product
        .discount_percent
        .map(|d| format!(r#"<span class="card-discount-badge">{}% OFF</span>"#, d))
        .unwrap_or_default();

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <a href="/products/{id}">
        <div class="card-image">
            <img src="{image}" alt="{name}" loading="lazy">
            {discount_badge}
        </div>
        <div class="card-body">
            <h3 class="card-name">{name}</h3>
            {rating}
            {price}
        </div>
    </a>
</article>"#,
        id = product.id,
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        discount_badge = discount_badge,
        rating = render_rating(product.rating, product.review_count),
        price = render_price_tag(product.price, product.original_price, None)
    )
}

/// Render the card grid for a derived view. An empty view renders the
/// empty-state instead.
pub fn render_card_grid(products: &[Product]) -> String {
    if products.is_empty() {
        return render_empty_state();
    }

    let cards: String = products.iter().map(render_card).collect();
    format!(r#"<div class="product-grid">{}</div>"#, cards)
}

/// Render the no-results state. The reset control is wired to the
/// listing's `reset_filters` intent.
pub fn render_empty_state() -> String {
    r#"<div class="empty-state">
    <h3>No products found</h3>
    <p>Try adjusting your filters to find what you're looking for.</p>
    <button type="button" class="btn-reset-filters" data-action="reset-filters">Reset all filters</button>
</div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::demo::demo_catalog;

    #[test]
    fn test_card_shows_name_rating_and_price() {
        let catalog = demo_catalog();
        let html = render_card(&catalog[0]);

        assert!(html.contains("Premium Wireless Headphones"));
        assert!(html.contains("$199.99"));
        assert!(html.contains("(128)"));
        assert!(html.contains("20% OFF"));
        assert!(html.contains(r#"href="/products/1""#));
    }

    #[test]
    fn test_card_without_discount_has_no_badge() {
        let catalog = demo_catalog();
        // Product 2 has no discount.
        let html = render_card(&catalog[1]);
        assert!(!html.contains("OFF"));
    }

    #[test]
    fn test_grid_renders_every_card() {
        let catalog = demo_catalog();
        let html = render_card_grid(&catalog);
        assert_eq!(html.matches("product-card").count(), catalog.len());
    }

    #[test]
    fn test_empty_view_renders_reset_control() {
        let html = render_card_grid(&[]);
        assert!(html.contains("No products found"));
        assert!(html.contains(r#"data-action="reset-filters""#));
    }
}
