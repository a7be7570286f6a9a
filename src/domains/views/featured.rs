//! Featured grid: every tool as a compact pill link, grouped by category.

use super::grouping::group_by_category;
use super::icons::category_icon;
use super::markup::escape_html;
use crate::domains::registry::ToolDescriptor;

pub fn build_featured_grid(tools: &[ToolDescriptor]) -> String {
    group_by_category(tools)
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let pills: String = group
                .tools
                .iter()
                .map(|t| {
                    format!(
                        r#"
    <div class="col-auto mb-3">
        <a href="{}" class="btn tool-name-btn">{}</a>
    </div>"#,
                        escape_html(&t.href()),
                        escape_html(&t.name)
                    )
                })
                .collect();
            // Blocks after the first are spaced from the one above.
            let margin = if index > 0 { " mt-4" } else { "" };
            format!(
                r#"
<div class="category-block py-3{margin}">
    <div class="row mb-4"><div class="col-12 text-center"><h3 class="category-header"><i class="{icon} me-2"></i>{title}</h3></div></div><div class="row g-2 justify-content-center">{pills}</div>
</div>"#,
                margin = margin,
                icon = category_icon(group.name),
                title = escape_html(group.name),
                pills = pills,
            )
        })
        .collect()
}
