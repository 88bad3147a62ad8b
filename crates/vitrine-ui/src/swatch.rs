//! Color swatch rendering.

use crate::escape_html;

/// Fallback swatch color for names the lookup does not know.
const FALLBACK_HEX: &str = "#6b7280";

/// Map a color name to its swatch hex value. Unrecognized names get the
/// gray fallback so the swatch always renders something.
pub fn swatch_hex(color: &str) -> &'static str {
    match color.to_lowercase().as_str() {
        "black" => "#000000",
        "white" => "#ffffff",
        "red" => "#ef4444",
        "blue" => "#3b82f6",
        "green" => "#10b981",
        "gray" => "#6b7280",
        "silver" => "#c0c0c0",
        _ => FALLBACK_HEX,
    }
}

/// Render a row of color swatch buttons, marking the selected one.
pub fn render_color_swatches(colors: &[String], selected: &str) -> String {
    let swatches: String = colors
        .iter()
        .map(|color| {
            let class = if color == selected {
                "swatch swatch--selected"
            } else {
                "swatch"
            };
            format!(
                r#"<button type="button" class="{class}" style="background-color: {hex}" data-color="{name}" title="{name}"></button>"#,
                class = class,
                hex = swatch_hex(color),
                name = escape_html(color)
            )
        })
        .collect();

    format!(r#"<div class="swatch-row">{}</div>"#, swatches)
}
