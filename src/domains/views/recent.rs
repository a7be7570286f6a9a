//! "Recently Added" grid.
//!
//! Registry order is taken as append order, so the newest tools are the
//! last entries of the registry.

use super::icons::category_icon;
use super::markup::escape_html;
use crate::domains::registry::ToolDescriptor;

/// The last `limit` tools of the registry, newest first.
pub fn recently_added(tools: &[ToolDescriptor], limit: usize) -> Vec<&ToolDescriptor> {
    let start = tools.len().saturating_sub(limit);
    tools[start..].iter().rev().collect()
}

/// Render the newest `limit` tools as full cards.
pub fn build_recently_added_grid(tools: &[ToolDescriptor], limit: usize) -> String {
    recently_added(tools, limit)
        .into_iter()
        .map(|tool| {
            format!(
                r#"
<div class="col">
    <a href="{href}" class="card h-100 all-tools-card">
        <div class="card-body d-flex flex-column">
            <div class="tool-icon mb-3"><i class="{icon}"></i></div>
            <h5 class="card-title">{name}</h5>
            <p class="card-text small flex-grow-1">{description}</p>
            <span class="badge tool-category-badge align-self-start">{category}</span>
        </div>
    </a>
</div>"#,
                href = escape_html(&tool.href()),
                icon = category_icon(tool.category()),
                name = escape_html(&tool.name),
                description = escape_html(tool.description()),
                category = escape_html(tool.category()),
            )
        })
        .collect()
}
