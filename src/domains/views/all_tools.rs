//! All-tools grid: full cards with a favorite toggle on each.

use std::collections::HashSet;

use super::icons::category_icon;
use super::markup::escape_html;
use crate::domains::registry::ToolDescriptor;

/// Visual state of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteIcon {
    /// Tool is a favorite.
    Filled,
    /// Tool is not a favorite.
    Outline,
}

impl FavoriteIcon {
    pub fn for_state(is_favorite: bool) -> Self {
        if is_favorite { Self::Filled } else { Self::Outline }
    }

    /// Icon style class.
    pub fn style(self) -> &'static str {
        match self {
            Self::Filled => "fa-solid",
            Self::Outline => "fa-regular",
        }
    }

    /// Full class list of the star icon.
    pub fn class(self) -> String {
        format!("{} fa-star", self.style())
    }
}

/// Render `tools` as cards, marking those in `favorites`.
pub fn build_all_tools_grid(tools: &[&ToolDescriptor], favorites: &HashSet<String>) -> String {
    tools
        .iter()
        .map(|tool| {
            let star = FavoriteIcon::for_state(favorites.contains(&tool.id));
            format!(
                r#"
<div class="col">
    <div class="card h-100 all-tools-card">
        <a href="{href}" class="stretched-link"></a>
        <button class="btn favorite-btn" data-tool-id="{id}" title="Add to Favorites">
            <i class="{star}"></i>
        </button>
        <div class="card-body d-flex flex-column">
            <div class="tool-icon mb-3"><i class="{icon}"></i></div>
            <h5 class="card-title">{name}</h5>
            <p class="card-text small flex-grow-1">{description}</p>
            <span class="badge tool-category-badge align-self-start">{category}</span>
        </div>
    </div>
</div>"#,
                href = escape_html(&tool.href()),
                id = escape_html(&tool.id),
                star = star.class(),
                icon = category_icon(tool.category()),
                name = escape_html(&tool.name),
                description = escape_html(tool.description()),
                category = escape_html(tool.category()),
            )
        })
        .collect()
}
