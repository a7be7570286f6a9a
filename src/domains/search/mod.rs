//! Search domain module.
//!
//! A linear, case-insensitive substring filter over the registry, presented
//! two ways: a debounced dropdown on the home page and a live filter on the
//! all-tools page.
//!
//! ## Architecture
//!
//! - `index.rs` - The match predicate and `SearchIndex`
//! - `dropdown.rs` - Home page live search (debounced)
//! - `page.rs` - All-tools page filter

mod dropdown;
mod index;
mod page;

pub use dropdown::LiveSearch;
pub use index::{SearchIndex, matches_query, normalize_query};
pub use page::{
    ALL_TOOLS_GRID_ID, ALL_TOOLS_SEARCH_INPUT_ID, AllToolsPage, NO_TOOLS_FOUND_ID,
};
