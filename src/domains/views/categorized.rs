//! Categorized views: sidebar accordion and home card sections.

use super::grouping::group_by_category;
use super::icons::category_icon;
use super::markup::{category_anchor_id, escape_html};
use crate::domains::registry::ToolDescriptor;

/// Where a categorized view is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorizedLayout {
    /// Collapsible accordion section per category.
    Sidebar,
    /// Card grid section per category, each with an anchor id.
    Home,
}

/// Render one section per category, categories in lexicographic order.
pub fn build_categorized_view(tools: &[ToolDescriptor], layout: CategorizedLayout) -> String {
    let groups = group_by_category(tools);

    match layout {
        CategorizedLayout::Sidebar => groups
            .iter()
            .enumerate()
            .map(|(index, group)| {
                let links: String = group.tools.iter().map(|t| sidebar_link(t)).collect();
                format!(
                    r##"
<div class="sidebar-section">
    <div class="sidebar-section-header" data-bs-toggle="collapse" data-bs-target="#sidebar-cat-{index}">
        <h6 class="sidebar-section-title">{title}</h6>
        <i class="fa-solid fa-chevron-down category-chevron"></i>
    </div>
    <ul class="nav-list collapse" id="sidebar-cat-{index}">{links}</ul>
</div>"##,
                    index = index,
                    title = escape_html(group.name),
                    links = links,
                )
            })
            .collect(),
        CategorizedLayout::Home => groups
            .iter()
            .map(|group| {
                let cards: String = group.tools.iter().map(|t| home_card(t)).collect();
                format!(
                    r#"<div class="row mb-4" id="{anchor}"><div class="col-12"><h4 class="category-header"><i class="{icon} me-2"></i>{title}</h4></div>{cards}</div>"#,
                    anchor = category_anchor_id(group.name),
                    icon = category_icon(group.name),
                    title = escape_html(group.name),
                    cards = cards,
                )
            })
            .collect(),
    }
}

fn sidebar_link(tool: &ToolDescriptor) -> String {
    format!(
        r#"
        <li class="nav-item">
            <a href="{href}" class="nav-link">
                <span class="nav-icon"><i class="fa-solid fa-screwdriver-wrench"></i></span>
                <span class="nav-text">{name}</span>
            </a>
        </li>"#,
        href = escape_html(&tool.href()),
        name = escape_html(&tool.name),
    )
}

fn home_card(tool: &ToolDescriptor) -> String {
    format!(
        r#"
        <div class="col-xl-3 col-lg-4 col-md-6 mb-4">
            <div class="card h-100 home-tool-card">
                <div class="card-body mytool d-flex flex-column">
                    <h5 class="card-title mb-2">{name}</h5>
                    <p class="card-text small flex-grow-1">{description}</p>
                    <div class="card-icon-bottom"><i class="fa-solid fa-arrow-right"></i></div>
                    <a class="stretched-link" href="{href}"></a>
                </div>
            </div>
        </div>"#,
        name = escape_html(&tool.name),
        description = escape_html(tool.description()),
        href = escape_html(&tool.href()),
    )
}
