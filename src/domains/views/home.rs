//! Home page.

use super::categorized::{CategorizedLayout, build_categorized_view};
use super::featured::build_featured_grid;
use super::recent::build_recently_added_grid;
use crate::domains::registry::ToolDescriptor;

/// Search field on the home page.
pub const HOME_SEARCH_INPUT_ID: &str = "homepage-tool-search";

/// Live-search dropdown below the home search field.
pub const HOME_SEARCH_DROPDOWN_ID: &str = "search-results-dropdown";

/// Hidden full categorized listing at the bottom of the home page.
pub const HOME_LIST_ID: &str = "home-list";

/// Render the home page: hero, search, featured grid, recently added, and
/// the categorized listing.
pub fn build_home_page(tools: &[ToolDescriptor], recent_limit: usize) -> String {
    format!(
        r##"
<div class="hero-section">
  <div class="hero-content">
    <h1 class="hero-title">A Suite of Powerful Web Tools</h1>
    <p class="hero-subtitle">Discover {count} meticulously crafted utilities, games, and generators, all in one place.</p>
    <a href="#" id="hero-explore-btn" class="btn hero-cta-btn">Explore Now</a>
  </div>
  <div class="hero-background-animation"></div>
</div>

<div class="homepage-search-container container">
  <div class="row justify-content-center">
    <div class="col-lg-8">
      <form class="search-form-home position-relative" role="search">
        <input id="{input_id}" class="form-control form-control-lg" type="search" placeholder="Search for a tool by name, tag, or description..." aria-label="Search">
        <div id="{dropdown_id}" class="search-results-dropdown" style="display: none;"></div>
      </form>
    </div>
  </div>
</div>

<div class="core-tools-container" id="explore-tools-section">
  <div class="container">
    <h1 class="text-center mb-5">Explore Our Tools</h1>
    <div id="core-categories-grid">{featured}</div>
  </div>
</div>

<div class="container my-5">
  <div class="d-flex justify-content-between align-items-center mb-4">
    <h2 class="mb-0">Recently Added</h2>
  </div>
  <div id="recently-added-grid" class="row row-cols-1 row-cols-md-2 row-cols-lg-4 g-4">{recent}</div>
</div>

<div class="container mt-5">
  <div id="{home_list_id}" class="row" style="display: none;">{home_list}</div>
</div>
"##,
        count = tools.len(),
        input_id = HOME_SEARCH_INPUT_ID,
        dropdown_id = HOME_SEARCH_DROPDOWN_ID,
        featured = build_featured_grid(tools),
        recent = build_recently_added_grid(tools, recent_limit),
        home_list_id = HOME_LIST_ID,
        home_list = build_categorized_view(tools, CategorizedLayout::Home),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_renders_empty_sections() {
        let html = build_home_page(&[], 8);

        assert!(html.contains("Discover 0 meticulously"));
        assert!(html.contains(r#"<div id="core-categories-grid"></div>"#));
        assert!(html.contains("row-cols-lg-4 g-4\"></div>"));
        assert_eq!(html.matches("all-tools-card").count(), 0);
        assert_eq!(html.matches("category-block").count(), 0);
    }

    #[test]
    fn test_home_page_lists_tools() {
        let tools = vec![
            ToolDescriptor::new("a", "Alpha", "X"),
            ToolDescriptor::new("b", "Beta", "Y"),
        ];

        let html = build_home_page(&tools, 8);

        assert!(html.contains("Discover 2 meticulously"));
        assert_eq!(html.matches("category-block").count(), 2);
        assert_eq!(html.matches("all-tools-card").count(), 2);
        assert!(html.contains("id=\"category-x\""));
        assert!(html.contains(HOME_SEARCH_INPUT_ID));
    }
}
