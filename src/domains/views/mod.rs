//! Navigation views domain module.
//!
//! Pure functions from registry data to markup. Nothing in here fetches,
//! touches the document, or mutates the registry; the router writes the
//! returned strings into the page.
//!
//! ## Architecture
//!
//! - `grouping.rs` - Category grouping shared by every categorized view
//! - `icons.rs` - Category to icon lookup
//! - `categorized.rs` - Sidebar accordion and home card sections
//! - `featured.rs` - Dense pill grid for the home page
//! - `recent.rs` - "Recently Added" cards
//! - `all_tools.rs` - All-tools cards with favorite toggles
//! - `home.rs` - The full home page
//! - `markup.rs` - Escaping and small shared fragments

mod all_tools;
mod categorized;
mod featured;
mod grouping;
mod home;
mod icons;
mod markup;
mod recent;

pub use all_tools::{FavoriteIcon, build_all_tools_grid};
pub use categorized::{CategorizedLayout, build_categorized_view};
pub use featured::build_featured_grid;
pub use grouping::{CategoryGroup, group_by_category};
pub use home::{HOME_LIST_ID, HOME_SEARCH_DROPDOWN_ID, HOME_SEARCH_INPUT_ID, build_home_page};
pub use icons::{FALLBACK_ICON, category_icon};
pub use markup::{category_anchor_id, error_panel, escape_html, tool_not_found_panel, wrap_tool_fragment};
pub use recent::{build_recently_added_grid, recently_added};
