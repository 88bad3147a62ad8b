//! Price tag renderer.

use vitrine_catalog::Price;

/// Render a price with its optional struck-through original and discount
/// badge. Prices always display with two decimals.
pub fn render_price_tag(price: Price, original: Option<Price>, discount: Option<u8>) -> String {
    render(price, original, discount, false)
}

/// Large variant for the detail surface.
pub fn render_price_tag_large(
    price: Price,
    original: Option<Price>,
    discount: Option<u8>,
) -> String {
    render(price, original, discount, true)
}

fn render(price: Price, original: Option<Price>, discount: Option<u8>, large: bool) -> String {
    let class = if large {
        "price-tag price-tag--large"
    } else {
        "price-tag"
    };

    let original_html = original
        .map(|o| format!(r#"<span class="price-original">{}</span>"#, o.display()))
        .unwrap_or_default();

    let discount_html = discount
        .map(|d| format!(r#"<span class="price-discount">{}% OFF</span>"#, d))
        .unwrap_or_default();

    format!(
        r#"<div class="{class}">
    <span class="price-current">{price}</span>
    {original_html}
    {discount_html}
</div>"#,
        class = class,
        price = price.display(),
        original_html = original_html,
        discount_html = discount_html
    )
}
