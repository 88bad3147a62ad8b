//! Detail surface renderers: full view, loading skeleton, not-found.

use crate::escape_html;
use crate::price_tag::render_price_tag_large;
use crate::rating::render_rating;
use crate::swatch::render_color_swatches;
use vitrine_browse::Selection;
use vitrine_catalog::Product;

/// Render the loaded detail view for a product and its current selections.
pub fn render_detail(product: &Product, selection: &Selection) -> String {
    let stock_badge = match product.in_stock {
        Some(true) => r#"<span class="stock-badge">In Stock</span>"#,
        _ => "",
    };

    let description = product
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="product-description">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    format!(
        r#"<section class="product-detail" data-product-id="{id}">
    {gallery}
    <div class="product-info">
        <h1 class="product-name">{name}</h1>
        <div class="product-meta">
            {rating}
            {stock_badge}
        </div>
        {price}
        {description}
        {features}
        {variants}
        {stepper}
        {details}
    </div>
</section>"#,
        id = product.id,
        gallery = render_gallery(product, &selection.image),
        name = escape_html(&product.name),
        rating = render_rating(product.rating, product.review_count),
        stock_badge = stock_badge,
        price = render_price_tag_large(
            product.price,
            product.original_price,
            product.discount_percent
        ),
        description = description,
        features = render_features(&product.features),
        variants = render_variants(product, selection),
        stepper = render_quantity_stepper(selection.quantity),
        details = render_details(product)
    )
}

fn render_gallery(product: &Product, selected_image: &str) -> String {
    let thumbnails: String = product
        .images
        .iter()
        .map(|image| {
            let class = if image == selected_image {
                "thumbnail thumbnail--selected"
            } else {
                "thumbnail"
            };
            format!(
                r#"<button type="button" class="{class}" data-image="{image}"><img src="{image}" alt=""></button>"#,
                class = class,
                image = escape_html(image)
            )
        })
        .collect();

    format!(
        r#"<div class="product-gallery">
        <img class="gallery-main" src="{selected}" alt="{name}">
        <div class="gallery-thumbnails">{thumbnails}</div>
    </div>"#,
        selected = escape_html(selected_image),
        name = escape_html(&product.name),
        thumbnails = thumbnails
    )
}

fn render_features(features: &[String]) -> String {
    if features.is_empty() {
        return String::new();
    }
    let items: String = features
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect();
    format!(r#"<ul class="product-features">{}</ul>"#, items)
}

fn render_variants(product: &Product, selection: &Selection) -> String {
    let mut out = String::new();

    if !product.colors.is_empty() {
        out.push_str(&format!(
            r#"<div class="variant-picker variant-picker--color">
        <h3>Color</h3>
        {}
    </div>"#,
            render_color_swatches(&product.colors, &selection.color)
        ));
    }

    if !product.sizes.is_empty() {
        let sizes: String = product
            .sizes
            .iter()
            .map(|size| {
                let class = if *size == selection.size {
                    "size-option size-option--selected"
                } else {
                    "size-option"
                };
                format!(
                    r#"<button type="button" class="{class}" data-size="{size}">{size}</button>"#,
                    class = class,
                    size = escape_html(size)
                )
            })
            .collect();
        out.push_str(&format!(
            r#"<div class="variant-picker variant-picker--size">
        <h3>Size</h3>
        <div class="size-row">{}</div>
    </div>"#,
            sizes
        ));
    }

    out
}

fn render_quantity_stepper(quantity: i64) -> String {
    let minus_disabled = if quantity <= 1 { " disabled" } else { "" };
    format!(
        r#"<div class="quantity-stepper">
        <button type="button" data-action="decrement"{minus_disabled}>-</button>
        <span class="quantity-value">{quantity}</span>
        <button type="button" data-action="increment">+</button>
    </div>"#,
        minus_disabled = minus_disabled,
        quantity = quantity
    )
}

fn render_details(product: &Product) -> String {
    if product.details.is_empty() {
        return String::new();
    }
    let rows: String = product
        .details
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="detail-row"><span class="detail-name">{}:</span><span class="detail-value">{}</span></div>"#,
                escape_html(&entry.name),
                escape_html(&entry.value)
            )
        })
        .collect();
    format!(
        r#"<div class="product-details">
        <h3>Details</h3>
        {}
    </div>"#,
        rows
    )
}

/// Render the loading skeleton shown while a lookup is in flight.
pub fn render_detail_skeleton() -> String {
    r#"<section class="product-detail product-detail--loading">
    <div class="skeleton skeleton-image"></div>
    <div class="skeleton-info">
        <div class="skeleton skeleton-title"></div>
        <div class="skeleton skeleton-line"></div>
        <div class="skeleton skeleton-line"></div>
        <div class="skeleton skeleton-button"></div>
    </div>
</section>"#
        .to_string()
}

/// Render the not-found state for an identifier with no product.
pub fn render_not_found() -> String {
    r#"<section class="product-detail product-detail--absent">
    <h2>Product not found</h2>
    <p>The product you're looking for doesn't exist.</p>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::demo::demo_catalog;

    fn loaded(id: u64) -> (Product, Selection) {
        let product = demo_catalog()
            .into_iter()
            .find(|p| p.id.value() == id)
            .unwrap();
        let selection = Selection::defaults_for(&product);
        (product, selection)
    }

    #[test]
    fn test_detail_shows_defaults_as_selected() {
        let (product, selection) = loaded(1);
        let html = render_detail(&product, &selection);

        assert!(html.contains("Premium Wireless Headphones"));
        assert!(html.contains("$199.99"));
        assert!(html.contains("In Stock"));
        // Default image drives the main gallery slot.
        assert!(html.contains(&format!(
            r#"<img class="gallery-main" src="{}""#,
            crate::escape_html(&product.images[0])
        )));
        assert!(html.contains("swatch--selected"));
        assert!(html.contains("size-option--selected"));
    }

    #[test]
    fn test_detail_renders_features_and_details() {
        let (product, selection) = loaded(1);
        let html = render_detail(&product, &selection);

        assert!(html.contains("Active Noise Cancellation"));
        assert!(html.contains("AudioMaster"));
    }

    #[test]
    fn test_product_without_sizes_has_no_size_picker() {
        let (product, selection) = loaded(4);
        let html = render_detail(&product, &selection);

        assert!(html.contains("variant-picker--color"));
        assert!(!html.contains("variant-picker--size"));
    }

    #[test]
    fn test_stepper_disables_minus_at_one() {
        let (product, mut selection) = loaded(1);

        let html = render_detail(&product, &selection);
        assert!(html.contains(r#"data-action="decrement" disabled"#));

        selection.quantity = 3;
        let html = render_detail(&product, &selection);
        assert!(!html.contains(r#"data-action="decrement" disabled"#));
        assert!(html.contains(r#"<span class="quantity-value">3</span>"#));
    }

    #[test]
    fn test_skeleton_and_not_found() {
        assert!(render_detail_skeleton().contains("product-detail--loading"));
        let html = render_not_found();
        assert!(html.contains("Product not found"));
        assert!(html.contains("product-detail--absent"));
    }
}
