//! All-tools page filter.
//!
//! The page fragment is fetched by the router; this binds to the elements
//! it provides, applies the query carried in the URL, and re-filters on
//! every input with no debounce.

use std::sync::Arc;

use tracing::{debug, warn};

use super::index::SearchIndex;
use crate::core::document::Document;
use crate::domains::storage::FavoritesRepository;
use crate::domains::views::build_all_tools_grid;

/// Search field of the all-tools page.
pub const ALL_TOOLS_SEARCH_INPUT_ID: &str = "all-tools-search-input";

/// Card grid of the all-tools page.
pub const ALL_TOOLS_GRID_ID: &str = "all-tools-grid";

/// Element shown instead of an empty grid.
pub const NO_TOOLS_FOUND_ID: &str = "no-tools-found";

/// Filter state of a mounted all-tools page.
#[derive(Clone)]
pub struct AllToolsPage {
    index: SearchIndex,
    document: Document,
    favorites: Arc<dyn FavoritesRepository>,
}

impl AllToolsPage {
    pub fn new(
        index: SearchIndex,
        document: Document,
        favorites: Arc<dyn FavoritesRepository>,
    ) -> Self {
        Self {
            index,
            document,
            favorites,
        }
    }

    /// Bind to the mounted page and render the initial grid.
    ///
    /// A non-empty `initial_query` pre-fills the search field and filters;
    /// otherwise every tool is shown. Returns the number of cards rendered,
    /// or `None` when the page lacks its search field, grid, or empty-state
    /// element.
    pub async fn setup(&self, initial_query: Option<&str>) -> Option<usize> {
        for id in [ALL_TOOLS_SEARCH_INPUT_ID, ALL_TOOLS_GRID_ID, NO_TOOLS_FOUND_ID] {
            if !self.document.contains(id).await {
                warn!("All-tools page has no #{}; search disabled", id);
                return None;
            }
        }

        let shown = match initial_query.filter(|q| !q.is_empty()) {
            Some(query) => {
                self.document
                    .set_value(ALL_TOOLS_SEARCH_INPUT_ID, query)
                    .await;
                self.filter_and_render(query).await
            }
            None => self.filter_and_render("").await,
        };
        Some(shown)
    }

    /// An input event on the search field.
    pub async fn input(&self, value: &str) -> usize {
        self.document
            .set_value(ALL_TOOLS_SEARCH_INPUT_ID, value)
            .await;
        self.filter_and_render(value).await
    }

    /// Re-render the grid for the query currently in the search field,
    /// picking up favorite changes.
    pub async fn refresh(&self) -> usize {
        let query = self
            .document
            .value(ALL_TOOLS_SEARCH_INPUT_ID)
            .await
            .unwrap_or_default();
        self.filter_and_render(&query).await
    }

    async fn filter_and_render(&self, query: &str) -> usize {
        let results = self.index.filter(query);
        debug!("All-tools filter {:?}: {} matches", query, results.len());

        let favorites = self.favorites.get();
        self.document
            .set_content(ALL_TOOLS_GRID_ID, build_all_tools_grid(&results, &favorites))
            .await;
        self.document
            .set_hidden(NO_TOOLS_FOUND_ID, !results.is_empty())
            .await;
        results.len()
    }
}
