//! Filter panel renderer.
//!
//! A thin surface over listing state: sort radio group, category
//! checkboxes, and the reset control. The intents themselves live on the
//! listing controller; the panel only reflects them.

use crate::escape_html;
use std::collections::BTreeSet;
use vitrine_browse::SortMode;
use vitrine_catalog::Category;

/// Render-only panel state: whether the mobile-collapsed panel is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPanel {
    expanded: bool,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open or close the mobile panel.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Render the panel for the given listing state.
    pub fn render(
        &self,
        categories: &[Category],
        selected: &BTreeSet<Category>,
        sort: SortMode,
    ) -> String {
        let panel_class = if self.expanded {
            "filter-panel filter-panel--expanded"
        } else {
            "filter-panel"
        };

        let badge = if selected.is_empty() {
            String::new()
        } else {
            format!(r#"<span class="filter-count">{}</span>"#, selected.len())
        };

        format!(
            r#"<aside class="{panel_class}">
    <button type="button" class="filter-toggle" data-action="toggle-panel">Filters {badge}</button>
    <div class="filter-groups">
        <div class="filter-group">
            <h3>Sort by</h3>
            {sort_options}
        </div>
        <div class="filter-group">
            <h3>Categories</h3>
            {category_options}
        </div>
        <button type="button" class="btn-reset-filters" data-action="reset-filters">Reset</button>
    </div>
</aside>"#,
            panel_class = panel_class,
            badge = badge,
            sort_options = render_sort_options(sort),
            category_options = render_category_options(categories, selected)
        )
    }
}

fn render_sort_options(active: SortMode) -> String {
    SortMode::all()
        .iter()
        .map(|mode| {
            let checked = if *mode == active { " checked" } else { "" };
            format!(
                r#"<label class="sort-option">
            <input type="radio" name="sort" value="{value}"{checked}>
            {label}
        </label>"#,
                value = mode.as_str(),
                checked = checked,
                label = mode.display_name()
            )
        })
        .collect()
}

fn render_category_options(categories: &[Category], selected: &BTreeSet<Category>) -> String {
    categories
        .iter()
        .map(|category| {
            let checked = if selected.contains(category) {
                " checked"
            } else {
                ""
            };
            format!(
                r#"<label class="category-option">
            <input type="checkbox" name="category" value="{value}"{checked}>
            {label}
        </label>"#,
                value = escape_html(category.as_str()),
                checked = checked,
                label = escape_html(&category.display_name())
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        ["electronics", "clothing", "accessories", "fitness"]
            .into_iter()
            .map(Category::new)
            .collect()
    }

    #[test]
    fn test_renders_all_sort_modes() {
        let panel = FilterPanel::new();
        let html = panel.render(&categories(), &BTreeSet::new(), SortMode::Featured);

        for mode in SortMode::all() {
            assert!(html.contains(mode.display_name()));
        }
    }

    #[test]
    fn test_active_sort_and_selected_categories_are_checked() {
        let panel = FilterPanel::new();
        let selected: BTreeSet<Category> = [Category::new("fitness")].into();
        let html = panel.render(&categories(), &selected, SortMode::Rating);

        assert!(html.contains(r#"value="rating" checked"#));
        assert!(html.contains(r#"value="fitness" checked"#));
        assert!(!html.contains(r#"value="clothing" checked"#));
    }

    #[test]
    fn test_filter_count_badge() {
        let panel = FilterPanel::new();
        let selected: BTreeSet<Category> =
            [Category::new("fitness"), Category::new("clothing")].into();
        let html = panel.render(&categories(), &selected, SortMode::Featured);

        assert!(html.contains(r#"<span class="filter-count">2</span>"#));
    }

    #[test]
    fn test_toggle_flips_expanded_markup() {
        let mut panel = FilterPanel::new();
        assert!(!panel.is_expanded());

        let collapsed = panel.render(&categories(), &BTreeSet::new(), SortMode::Featured);
        assert!(!collapsed.contains("filter-panel--expanded"));

        panel.toggle();
        assert!(panel.is_expanded());
        let expanded = panel.render(&categories(), &BTreeSet::new(), SortMode::Featured);
        assert!(expanded.contains("filter-panel--expanded"));
    }
}
