//! Presentational HTML renderers for Vitrine surfaces.
//!
//! Every renderer is a pure function from controller state to an HTML
//! string; nothing here owns state or makes decisions beyond formatting.
//! The one exception is [`FilterPanel`], which keeps a single render-only
//! flag: whether the mobile-collapsed panel is expanded.

pub mod card;
pub mod detail;
pub mod filter_panel;
pub mod price_tag;
pub mod rating;
pub mod swatch;

pub use card::{render_card, render_card_grid, render_empty_state};
pub use detail::{render_detail, render_detail_skeleton, render_not_found};
pub use filter_panel::FilterPanel;
pub use price_tag::{render_price_tag, render_price_tag_large};
pub use rating::render_rating;
pub use swatch::{render_color_swatches, swatch_hex};

/// Escape text for safe HTML interpolation.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
