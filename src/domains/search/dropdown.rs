//! Home page live search.
//!
//! Input is debounced: each keystroke restarts the quiet period, and only
//! the last input of a burst runs the filter. Results render into the
//! dropdown below the search field; an empty query or an empty result set
//! hides it. Submitting the form does not pick a result, it hands the query
//! to the all-tools page.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::debug;

use super::index::{SearchIndex, normalize_query};
use crate::core::config::SearchConfig;
use crate::core::document::Document;
use crate::domains::registry::ToolDescriptor;
use crate::domains::router::all_tools_hash;
use crate::domains::views::{
    HOME_SEARCH_DROPDOWN_ID, HOME_SEARCH_INPUT_ID, category_icon, escape_html,
};

/// Debounced search bound to the home page's search field.
///
/// Cheap to clone; clones share the pending-input state.
#[derive(Clone)]
pub struct LiveSearch {
    inner: Arc<Inner>,
}

struct Inner {
    index: SearchIndex,
    document: Document,
    debounce: Duration,
    limit: usize,
    /// Bumped by every input; a pending filter only runs if it is still current.
    generation: AtomicU64,
    executions: AtomicU64,
}

impl LiveSearch {
    pub fn new(index: SearchIndex, document: Document, config: &SearchConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                index,
                document,
                debounce: config.debounce(),
                limit: config.dropdown_limit,
                generation: AtomicU64::new(0),
                executions: AtomicU64::new(0),
            }),
        }
    }

    /// Record an input event and schedule a filter after the quiet period.
    pub async fn input(&self, value: &str) {
        self.inner
            .document
            .set_value(HOME_SEARCH_INPUT_ID, value)
            .await;

        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let search = self.clone();
        let value = value.to_string();

        tokio::spawn(async move {
            tokio::time::sleep(search.inner.debounce).await;
            if search.inner.generation.load(Ordering::SeqCst) != generation {
                return;
            }
            search.search(&value).await;
        });
    }

    /// Filter now and render the dropdown. Returns the number of matches.
    pub async fn search(&self, value: &str) -> usize {
        self.inner.executions.fetch_add(1, Ordering::SeqCst);
        let document = &self.inner.document;

        let query = normalize_query(value);
        if query.is_empty() {
            document.set_hidden(HOME_SEARCH_DROPDOWN_ID, true).await;
            return 0;
        }

        let results = self.inner.index.filter(&query);
        debug!("Home search {:?}: {} matches", query, results.len());

        if results.is_empty() {
            document.set_hidden(HOME_SEARCH_DROPDOWN_ID, true).await;
            return 0;
        }

        let markup: String = results
            .iter()
            .take(self.inner.limit)
            .map(|tool| dropdown_entry(tool))
            .collect();
        document.set_content(HOME_SEARCH_DROPDOWN_ID, markup).await;
        document.set_hidden(HOME_SEARCH_DROPDOWN_ID, false).await;
        results.len()
    }

    /// Submit the search form.
    ///
    /// Cancels any pending filter, hides the dropdown, and returns the hash
    /// to navigate to.
    pub async fn submit(&self) -> String {
        self.cancel();
        let document = &self.inner.document;
        let value = document
            .value(HOME_SEARCH_INPUT_ID)
            .await
            .unwrap_or_default();
        document.set_hidden(HOME_SEARCH_DROPDOWN_ID, true).await;
        all_tools_hash(Some(value.trim()))
    }

    /// A click somewhere outside the search form.
    pub async fn dismiss(&self) {
        self.inner
            .document
            .set_hidden(HOME_SEARCH_DROPDOWN_ID, true)
            .await;
    }

    /// Drop any pending filter.
    pub fn cancel(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// How many times the filter has actually run.
    pub fn executions(&self) -> u64 {
        self.inner.executions.load(Ordering::SeqCst)
    }
}

fn dropdown_entry(tool: &ToolDescriptor) -> String {
    format!(
        r#"
<a href="{href}" class="search-result-item">
    <i class="search-result-icon {icon}"></i>
    <div class="search-result-text">
        <strong class="search-result-name">{name}</strong>
        <span class="search-result-desc">{description}</span>
    </div>
</a>"#,
        href = escape_html(&tool.href()),
        icon = category_icon(tool.category()),
        name = escape_html(&tool.name),
        description = escape_html(tool.description()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::APP_MOUNT;
    use crate::domains::registry::ToolRegistry;
    use crate::domains::views::build_home_page;

    async fn setup(tools: Vec<ToolDescriptor>) -> (LiveSearch, Document) {
        let registry = Arc::new(ToolRegistry::new(tools));
        let document = Document::new();
        document
            .set_content(APP_MOUNT, build_home_page(registry.tools(), 8))
            .await;
        let search = LiveSearch::new(
            SearchIndex::new(registry),
            document.clone(),
            &SearchConfig::default(),
        );
        (search, document)
    }

    fn many_tools(n: usize) -> Vec<ToolDescriptor> {
        (0..n)
            .map(|i| ToolDescriptor::new(format!("game-{i}"), format!("Game {i}"), "Games"))
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_input_runs_filter_once() {
        let (search, document) = setup(many_tools(3)).await;

        search.input("g").await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        search.input("ga").await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        search.input("gam").await;
        assert_eq!(search.executions(), 0);

        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(search.executions(), 1);
        assert_eq!(document.is_hidden(HOME_SEARCH_DROPDOWN_ID).await, Some(false));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_inputs_each_run() {
        let (search, _document) = setup(many_tools(3)).await;

        search.input("game").await;
        tokio::time::sleep(Duration::from_millis(400)).await;
        search.input("game 1").await;
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(search.executions(), 2);
    }

    #[tokio::test]
    async fn test_dropdown_caps_results() {
        let (search, document) = setup(many_tools(10)).await;

        assert_eq!(search.search("game").await, 10);

        let markup = document.content(HOME_SEARCH_DROPDOWN_ID).await.unwrap();
        assert_eq!(markup.matches("search-result-item").count(), 7);
    }

    #[tokio::test]
    async fn test_empty_query_and_no_results_hide_dropdown() {
        let (search, document) = setup(many_tools(2)).await;

        search.search("game").await;
        assert_eq!(document.is_hidden(HOME_SEARCH_DROPDOWN_ID).await, Some(false));

        search.search("   ").await;
        assert_eq!(document.is_hidden(HOME_SEARCH_DROPDOWN_ID).await, Some(true));

        search.search("game").await;
        search.search("sudoku").await;
        assert_eq!(document.is_hidden(HOME_SEARCH_DROPDOWN_ID).await, Some(true));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_hands_query_to_all_tools() {
        let (search, document) = setup(many_tools(2)).await;

        search.input(" game 1 ").await;
        let hash = search.submit().await;
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(hash, "#all-tools?q=game+1");
        assert_eq!(search.executions(), 0);
        assert_eq!(document.is_hidden(HOME_SEARCH_DROPDOWN_ID).await, Some(true));
    }

    #[tokio::test]
    async fn test_outside_click_dismisses() {
        let (search, document) = setup(many_tools(2)).await;
        search.search("game").await;

        search.dismiss().await;

        assert_eq!(document.is_hidden(HOME_SEARCH_DROPDOWN_ID).await, Some(true));
    }
}
