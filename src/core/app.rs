//! Application assembly and startup.
//!
//! [`Toolverse`] wires the content source, the document, local storage and
//! the router together, then runs the startup sequence:
//!
//! 1. Load the header and footer components
//! 2. Load the tool registry
//! 3. Render the sidebar and apply the stored theme, when the header has
//!    room for them
//!
//! Routing the initial hash is left to the caller, exactly like every later
//! hash change.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::config::Config;
use super::document::Document;
use super::error::Result;
use super::source::{CachingSource, ContentSource, build_source};
use crate::domains::components::ComponentLoader;
use crate::domains::registry::{RegistryLoader, ToolRegistry};
use crate::domains::router::{ALL_TOOLS_ROUTE, ModuleLoader, NavigationOutcome, Router};
use crate::domains::search::SearchIndex;
use crate::domains::storage::{
    FavoritesStore, JsonFileStore, KeyValueStore, MemoryStore, Theme, ThemeStore,
};
use crate::domains::tools::builtin_modules;
use crate::domains::views::{CategorizedLayout, FavoriteIcon, build_categorized_view};

/// Sidebar list inside the header component.
pub const SIDEBAR_LIST_ID: &str = "sidebar-tool-list";

/// Theme toggle button inside the header component.
pub const THEME_TOGGLE_ID: &str = "theme-toggle-btn";

/// A running tool suite.
pub struct Toolverse {
    config: Arc<Config>,
    document: Document,
    registry: Arc<ToolRegistry>,
    router: Arc<Router>,
    favorites: FavoritesStore,
    theme: ThemeStore,
}

impl Toolverse {
    /// Build the suite described by `config` and run startup.
    ///
    /// Uses the configured content source (behind a precached response
    /// cache unless disabled), the JSON storage file if one is configured
    /// (memory otherwise), and the built-in behavior modules.
    pub async fn from_config(config: Config) -> Result<Self> {
        let mut source = build_source(&config.source)?;

        if config.cache.enabled {
            let cache = CachingSource::new(config.cache.name.clone(), source);
            let header = config.paths.component("header");
            let footer = config.paths.component("footer");
            let all_tools = config.paths.tool_html(ALL_TOOLS_ROUTE);
            let cached = cache
                .precache(&[
                    header.as_str(),
                    footer.as_str(),
                    config.paths.registry.as_str(),
                    all_tools.as_str(),
                ])
                .await;
            info!("Precached {} site files", cached);
            source = Arc::new(cache);
        }

        let store: Arc<dyn KeyValueStore> = match &config.storage.path {
            Some(path) => Arc::new(JsonFileStore::open(path.clone())?),
            None => Arc::new(MemoryStore::new()),
        };

        Ok(Self::start(config, source, store, Arc::new(builtin_modules())).await)
    }

    /// Run startup against explicit parts.
    ///
    /// Never fails: missing components and an unreadable registry degrade
    /// to empty content.
    #[instrument(skip_all, fields(site = %config.site.name))]
    pub async fn start(
        config: Config,
        source: Arc<dyn ContentSource>,
        store: Arc<dyn KeyValueStore>,
        modules: Arc<dyn ModuleLoader>,
    ) -> Self {
        let config = Arc::new(config);
        let document = Document::new();

        info!("Loading site from {}", source.description());

        let components = ComponentLoader::new(source.clone(), document.clone());
        components
            .load_chrome(
                &config.paths.component("header"),
                &config.paths.component("footer"),
            )
            .await;

        let registry = Arc::new(
            RegistryLoader::new(source.clone(), config.paths.registry.clone())
                .load()
                .await,
        );
        info!("Registry holds {} tools", registry.len());

        let favorites = FavoritesStore::new(store.clone());
        let theme = ThemeStore::new(store);

        let router = Arc::new(Router::new(
            config.clone(),
            source,
            document.clone(),
            SearchIndex::new(registry.clone()),
            Arc::new(favorites.clone()),
            modules,
        ));

        let app = Self {
            config,
            document,
            registry,
            router,
            favorites,
            theme,
        };
        app.render_sidebar().await;
        app.apply_theme(app.theme.current()).await;
        app
    }

    /// Handle a hash change.
    pub async fn navigate(&self, hash: &str) -> NavigationOutcome {
        self.router.navigate(hash).await
    }

    /// Toggle a favorite and return the icon the clicked control now shows.
    ///
    /// A mounted all-tools grid is redrawn so the card's star flips.
    pub async fn toggle_favorite(&self, tool_id: &str) -> Result<FavoriteIcon> {
        let icon = self.favorites.click(tool_id)?;
        if let Some(page) = self.router.all_tools_page().await {
            page.refresh().await;
        }
        Ok(icon)
    }

    /// Flip the theme, persist it, and update the toggle button.
    pub async fn toggle_theme(&self) -> Result<Theme> {
        let theme = self.theme.toggle()?;
        self.apply_theme(theme).await;
        Ok(theme)
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// Current markup of the main content mount.
    pub async fn app_content(&self) -> String {
        self.document
            .content(super::document::APP_MOUNT)
            .await
            .unwrap_or_default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    async fn render_sidebar(&self) {
        let markup = build_categorized_view(self.registry.tools(), CategorizedLayout::Sidebar);
        if !self.document.set_content(SIDEBAR_LIST_ID, markup).await {
            debug!("Header has no #{}; sidebar skipped", SIDEBAR_LIST_ID);
        }
    }

    async fn apply_theme(&self, theme: Theme) {
        self.document
            .set_content(THEME_TOGGLE_ID, theme.toggle_icon())
            .await;
    }
}
