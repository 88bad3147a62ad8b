//! Rating star renderer.

/// Render a star row for a 0-5 rating plus the review count.
pub fn render_rating(rating: f64, review_count: u32) -> String {
    format!(
        r#"<div class="rating">
    <span class="rating-stars" title="{rating:.1}">{stars}</span>
    <span class="rating-count">({review_count})</span>
</div>"#,
        rating = rating,
        stars = stars_for(rating),
        review_count = review_count
    )
}

/// A five-character star row, filled to the nearest whole star.
fn stars_for(rating: f64) -> String {
    let filled = (rating.round().clamp(0.0, 5.0)) as usize;
    "\u{2605}".repeat(filled) + &"\u{2606}".repeat(5 - filled)
}
