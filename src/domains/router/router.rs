//! Router core.
//!
//! Every navigation runs the same sequence: tear down the active module,
//! resolve and fetch the content, mount it, then import and initialize the
//! tool's behavior module. Teardown always finishes (or times out) before
//! the next mount begins, and `init` never runs before its fragment is in
//! the page.
//!
//! Navigations may overlap. Each one takes a sequence number when it
//! starts; one that is no longer the latest when its content arrives is
//! dropped without touching the page.
//!
//! A module's `init` runs outside the router lock, so a slow or hung `init`
//! never holds up the next navigation. Tearing that module down interrupts
//! its `init` first.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, Notify};
use tracing::{debug, error, info, instrument, warn};

use super::error::ToolError;
use super::module::{ModuleLoader, ToolContext, ToolModule};
use super::route::{ALL_TOOLS_ROUTE, Route};
use crate::core::config::Config;
use crate::core::document::{APP_MOUNT, Document};
use crate::core::source::ContentSource;
use crate::domains::search::{AllToolsPage, LiveSearch, SearchIndex};
use crate::domains::storage::FavoritesRepository;
use crate::domains::views::{
    build_home_page, error_panel, tool_not_found_panel, wrap_tool_fragment,
};

/// Message shown when the all-tools fragment cannot be fetched.
const ALL_TOOLS_UNAVAILABLE: &str = "Could not load the tool suite page.";

/// Where the router stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Nothing mounted yet.
    Idle,
    /// Content for the route is being fetched.
    Loading(Route),
    /// The route's content is in the page.
    Mounted(Route),
    /// The route's content could not be loaded. The next navigation starts over.
    Error(Route),
}

/// How a navigation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The home view was rendered.
    Home,
    /// The all-tools page was mounted; `results` is the number of cards
    /// shown, or `None` if the page lacked its search elements.
    AllTools { results: Option<usize> },
    /// The all-tools fragment could not be fetched.
    AllToolsUnavailable,
    /// A tool fragment was mounted; `module` tells whether a behavior
    /// module was imported for it.
    Mounted { id: String, module: bool },
    /// No fragment exists for the requested id.
    NotFound { id: String },
    /// A newer navigation started before this one could mount.
    Superseded,
}

struct ActiveModule {
    id: String,
    module: Arc<Mutex<Box<dyn ToolModule>>>,
    /// Signalled by teardown to cut a pending `init` short.
    interrupt: Arc<Notify>,
}

struct RouterState {
    phase: Phase,
    active: Option<ActiveModule>,
    home_search: Option<LiveSearch>,
    all_tools: Option<AllToolsPage>,
}

/// The hash router.
///
/// Owns the single active tool module. Share it behind an `Arc` to drive
/// navigations from several tasks.
pub struct Router {
    config: Arc<Config>,
    source: Arc<dyn ContentSource>,
    document: Document,
    index: SearchIndex,
    favorites: Arc<dyn FavoritesRepository>,
    modules: Arc<dyn ModuleLoader>,
    sequence: AtomicU64,
    state: Mutex<RouterState>,
}

impl Router {
    pub fn new(
        config: Arc<Config>,
        source: Arc<dyn ContentSource>,
        document: Document,
        index: SearchIndex,
        favorites: Arc<dyn FavoritesRepository>,
        modules: Arc<dyn ModuleLoader>,
    ) -> Self {
        Self {
            config,
            source,
            document,
            index,
            favorites,
            modules,
            sequence: AtomicU64::new(0),
            state: Mutex::new(RouterState {
                phase: Phase::Idle,
                active: None,
                home_search: None,
                all_tools: None,
            }),
        }
    }

    /// Navigate to `hash` (with or without the leading `#`).
    ///
    /// Never fails: missing content becomes an error panel in the page.
    #[instrument(skip_all, fields(hash = %hash))]
    pub async fn navigate(&self, hash: &str) -> NavigationOutcome {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let route = Route::resolve(hash);
        debug!("Navigation {} resolved to {:?}", seq, route);

        {
            let mut state = self.state.lock().await;
            if !self.is_current(seq) {
                return superseded(seq);
            }
            self.teardown(&mut state).await;
            state.phase = Phase::Loading(route.clone());
        }

        match route {
            Route::Home => self.mount_home(seq).await,
            Route::AllTools { query } => self.mount_all_tools(seq, query).await,
            Route::Tool(id) => self.mount_tool(seq, id).await,
            Route::NotFound(id) => self.mount_not_found(seq, id).await,
        }
    }

    /// Id of the tool whose behavior module is active, if any.
    pub async fn active_module_id(&self) -> Option<String> {
        self.state
            .lock()
            .await
            .active
            .as_ref()
            .map(|active| active.id.clone())
    }

    pub async fn phase(&self) -> Phase {
        self.state.lock().await.phase.clone()
    }

    /// Live search of the mounted home view.
    pub async fn home_search(&self) -> Option<LiveSearch> {
        self.state.lock().await.home_search.clone()
    }

    /// Filter of the mounted all-tools page.
    pub async fn all_tools_page(&self) -> Option<AllToolsPage> {
        self.state.lock().await.all_tools.clone()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    fn is_current(&self, seq: u64) -> bool {
        self.sequence.load(Ordering::SeqCst) == seq
    }

    /// Release everything the previous route left running.
    async fn teardown(&self, state: &mut RouterState) {
        if let Some(search) = state.home_search.take() {
            search.cancel();
        }
        state.all_tools = None;

        let Some(active) = state.active.take() else {
            return;
        };
        active.interrupt.notify_one();

        let limit = self.config.router.teardown_timeout();
        let cleanup = async { active.module.lock().await.cleanup().await };
        let result = tokio::time::timeout(limit, cleanup)
            .await
            .unwrap_or(Err(ToolError::Timeout(limit)));
        match result {
            Ok(()) => debug!("Tore down {}", active.id),
            Err(e) => warn!("Teardown of {} failed: {}", active.id, e),
        }
    }

    async fn mount_home(&self, seq: u64) -> NavigationOutcome {
        let mut state = self.state.lock().await;
        if !self.is_current(seq) {
            return superseded(seq);
        }

        let markup = build_home_page(
            self.index.registry().tools(),
            self.config.views.recent_limit,
        );
        self.document.set_content(APP_MOUNT, markup).await;

        state.home_search = Some(LiveSearch::new(
            self.index.clone(),
            self.document.clone(),
            &self.config.search,
        ));
        state.phase = Phase::Mounted(Route::Home);
        NavigationOutcome::Home
    }

    async fn mount_all_tools(&self, seq: u64, query: Option<String>) -> NavigationOutcome {
        let path = self.config.paths.tool_html(ALL_TOOLS_ROUTE);
        let fetched = self.source.fetch_text(&path).await;

        let mut state = self.state.lock().await;
        if !self.is_current(seq) {
            return superseded(seq);
        }

        let route = Route::AllTools {
            query: query.clone(),
        };
        let html = match fetched {
            Ok(html) => html,
            Err(e) => {
                error!("Error loading all-tools page from {}: {}", path, e);
                self.document
                    .set_content(APP_MOUNT, error_panel(ALL_TOOLS_UNAVAILABLE))
                    .await;
                state.phase = Phase::Error(route);
                return NavigationOutcome::AllToolsUnavailable;
            }
        };
        self.document.set_content(APP_MOUNT, html).await;

        let page = AllToolsPage::new(
            self.index.clone(),
            self.document.clone(),
            self.favorites.clone(),
        );
        let results = page.setup(query.as_deref()).await;

        state.all_tools = Some(page);
        state.phase = Phase::Mounted(route);
        NavigationOutcome::AllTools { results }
    }

    async fn mount_tool(&self, seq: u64, id: String) -> NavigationOutcome {
        let path = self.config.paths.tool_html(&id);
        let fetched = self.source.fetch_text(&path).await;

        let mut state = self.state.lock().await;
        if !self.is_current(seq) {
            return superseded(seq);
        }

        let html = match fetched {
            Ok(html) => html,
            Err(e) => {
                error!("Error loading tool {} from {}: {}", id, path, e);
                return self.render_not_found(&mut state, id).await;
            }
        };
        self.document
            .set_content(APP_MOUNT, wrap_tool_fragment(&html))
            .await;

        let module = match self.modules.import(&id).await {
            Ok(module) => Some(ActiveModule {
                id: id.clone(),
                module: Arc::new(Mutex::new(module)),
                interrupt: Arc::new(Notify::new()),
            }),
            Err(e) => {
                info!(
                    "No behavior module at {}: {}",
                    self.config.paths.tool_script(&id),
                    e
                );
                None
            }
        };

        // Active before init so a failed or interrupted init still gets its teardown.
        let pending = module
            .as_ref()
            .map(|active| (active.module.clone(), active.interrupt.clone()));
        state.active = module;
        state.phase = Phase::Mounted(Route::Tool(id.clone()));
        drop(state);
        info!("Mounted {}", id);

        let Some((module, interrupt)) = pending else {
            return NavigationOutcome::Mounted { id, module: false };
        };
        self.init_module(seq, &id, &module, &interrupt).await;
        NavigationOutcome::Mounted { id, module: true }
    }

    async fn init_module(
        &self,
        seq: u64,
        id: &str,
        module: &Mutex<Box<dyn ToolModule>>,
        interrupt: &Notify,
    ) {
        let mut module = module.lock().await;
        if !self.is_current(seq) {
            debug!("Skipping init of {}: navigation {} superseded", id, seq);
            return;
        }

        let ctx = ToolContext::new(id, self.document.clone());
        tokio::select! {
            result = module.init(&ctx) => {
                if let Err(e) = result {
                    error!("Init of {} failed: {}", id, e);
                }
            }
            _ = interrupt.notified() => {
                warn!("Init of {} interrupted by navigation", id);
            }
        }
    }

    async fn mount_not_found(&self, seq: u64, id: String) -> NavigationOutcome {
        let mut state = self.state.lock().await;
        if !self.is_current(seq) {
            return superseded(seq);
        }
        error!("Hash {:?} does not name a tool", id);
        self.render_not_found(&mut state, id).await
    }

    async fn render_not_found(&self, state: &mut RouterState, id: String) -> NavigationOutcome {
        self.document
            .set_content(APP_MOUNT, tool_not_found_panel(&id))
            .await;
        state.phase = Phase::Error(Route::NotFound(id.clone()));
        NavigationOutcome::NotFound { id }
    }
}

fn superseded(seq: u64) -> NavigationOutcome {
    debug!("Navigation {} superseded", seq);
    NavigationOutcome::Superseded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::{MemorySource, SourceResult};
    use crate::domains::registry::{ToolDescriptor, ToolRegistry};
    use crate::domains::router::{ModuleRegistry, ToolError};
    use crate::domains::storage::{FavoritesStore, MemoryStore};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    type Log = Arc<StdMutex<Vec<String>>>;

    fn record(log: &Log, entry: impl Into<String>) {
        log.lock().unwrap().push(entry.into());
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    /// Records every fetch into the shared log.
    struct RecordingSource {
        inner: MemorySource,
        log: Log,
    }

    #[async_trait]
    impl ContentSource for RecordingSource {
        async fn fetch_text(&self, path: &str) -> SourceResult<String> {
            record(&self.log, format!("fetch {}", path));
            self.inner.fetch_text(path).await
        }

        fn description(&self) -> String {
            "recording".to_string()
        }
    }

    /// Holds fetches of one path until released.
    struct GatedSource {
        inner: MemorySource,
        gated: String,
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl ContentSource for GatedSource {
        async fn fetch_text(&self, path: &str) -> SourceResult<String> {
            if path == self.gated {
                self.entered.notify_one();
                self.release.notified().await;
            }
            self.inner.fetch_text(path).await
        }

        fn description(&self) -> String {
            "gated".to_string()
        }
    }

    /// A tool that starts an interval in `init` and stops it in `cleanup`.
    struct Ticker {
        name: &'static str,
        log: Log,
        timer: Option<tokio::task::JoinHandle<()>>,
    }

    #[async_trait]
    impl ToolModule for Ticker {
        async fn init(&mut self, ctx: &ToolContext) -> Result<(), ToolError> {
            if !ctx.document.contains("board").await {
                return Err(ToolError::missing_element("board"));
            }
            record(&self.log, format!("init {}", self.name));
            self.timer = Some(tokio::spawn(async {
                let mut interval = tokio::time::interval(Duration::from_millis(100));
                loop {
                    interval.tick().await;
                }
            }));
            Ok(())
        }

        async fn cleanup(&mut self) -> Result<(), ToolError> {
            if let Some(timer) = self.timer.take() {
                timer.abort();
            }
            record(&self.log, format!("cleanup {}", self.name));
            Ok(())
        }
    }

    struct FailingCleanup;

    #[async_trait]
    impl ToolModule for FailingCleanup {
        async fn init(&mut self, _ctx: &ToolContext) -> Result<(), ToolError> {
            Ok(())
        }

        async fn cleanup(&mut self) -> Result<(), ToolError> {
            Err(ToolError::hook_failed("audio context already closed"))
        }
    }

    struct HangingCleanup;

    #[async_trait]
    impl ToolModule for HangingCleanup {
        async fn init(&mut self, _ctx: &ToolContext) -> Result<(), ToolError> {
            Ok(())
        }

        async fn cleanup(&mut self) -> Result<(), ToolError> {
            std::future::pending::<()>().await;
            Ok(())
        }
    }

    /// Notes whether the next tool was already in the page when cleanup ran.
    struct WatchfulCleanup {
        document: Option<Document>,
        log: Log,
    }

    #[async_trait]
    impl ToolModule for WatchfulCleanup {
        async fn init(&mut self, ctx: &ToolContext) -> Result<(), ToolError> {
            self.document = Some(ctx.document.clone());
            Ok(())
        }

        async fn cleanup(&mut self) -> Result<(), ToolError> {
            let next_mounted = match &self.document {
                Some(document) => document.contains("todo-items").await,
                None => false,
            };
            record(&self.log, format!("cleanup, todo-items mounted: {}", next_mounted));
            Ok(())
        }
    }

    /// An `init` that never resolves.
    struct HungInit {
        entered: Arc<Notify>,
        log: Log,
    }

    #[async_trait]
    impl ToolModule for HungInit {
        async fn init(&mut self, _ctx: &ToolContext) -> Result<(), ToolError> {
            self.entered.notify_one();
            std::future::pending::<()>().await;
            Ok(())
        }

        async fn cleanup(&mut self) -> Result<(), ToolError> {
            record(&self.log, "cleanup calculator");
            Ok(())
        }
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::new(vec![
            ToolDescriptor::new("snake-game", "Snake Game", "Games"),
            ToolDescriptor::new("todo-list", "Todo List", "Productivity"),
            ToolDescriptor::new("calculator", "Calculator", "Calculators")
                .with_description("basic math"),
        ])
    }

    fn site() -> MemorySource {
        MemorySource::new()
            .with("tools/snake-game.html", r#"<div id="board"></div>"#)
            .with("tools/todo-list.html", r#"<ul id="todo-items"></ul>"#)
            .with("tools/calculator.html", r#"<input id="display">"#)
            .with(
                "tools/all-tools.html",
                r#"<input id="all-tools-search-input"><div id="all-tools-grid"></div><p id="no-tools-found" class="d-none">No tools</p>"#,
            )
    }

    fn modules(log: &Log) -> ModuleRegistry {
        let mut modules = ModuleRegistry::new();
        let snake_log = log.clone();
        modules.register("snake-game", move || {
            Box::new(Ticker {
                name: "snake-game",
                log: snake_log.clone(),
                timer: None,
            })
        });
        modules
    }

    fn router(source: Arc<dyn ContentSource>, modules: ModuleRegistry) -> Router {
        Router::new(
            Arc::new(Config::default()),
            source,
            Document::new(),
            SearchIndex::new(Arc::new(registry())),
            Arc::new(FavoritesStore::new(Arc::new(MemoryStore::new()))),
            Arc::new(modules),
        )
    }

    async fn app_content(router: &Router) -> String {
        router.document().content(APP_MOUNT).await.unwrap_or_default()
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let router = router(Arc::new(site()), ModuleRegistry::new());
        assert_eq!(router.phase().await, Phase::Idle);
        assert_eq!(router.active_module_id().await, None);
    }

    #[tokio::test]
    async fn test_unknown_tool_renders_error_panel() {
        let router = router(Arc::new(site()), ModuleRegistry::new());

        let outcome = router.navigate("#nonexistent").await;

        assert_eq!(
            outcome,
            NavigationOutcome::NotFound {
                id: "nonexistent".to_string()
            }
        );
        let content = app_content(&router).await;
        assert!(content.contains("alert-danger"));
        assert!(content.contains("nonexistent"));
        assert_eq!(router.active_module_id().await, None);
        assert!(matches!(router.phase().await, Phase::Error(_)));
    }

    #[tokio::test]
    async fn test_unroutable_hash_is_not_fetched() {
        let log = Log::default();
        let source = RecordingSource {
            inner: site(),
            log: log.clone(),
        };
        let router = router(Arc::new(source), ModuleRegistry::new());

        let outcome = router.navigate("#../config").await;

        assert!(matches!(outcome, NavigationOutcome::NotFound { .. }));
        assert!(entries(&log).is_empty());
    }

    #[tokio::test]
    async fn test_markup_only_tool_mounts_without_module() {
        let router = router(Arc::new(site()), ModuleRegistry::new());

        let outcome = router.navigate("#todo-list").await;

        assert_eq!(
            outcome,
            NavigationOutcome::Mounted {
                id: "todo-list".to_string(),
                module: false
            }
        );
        let content = app_content(&router).await;
        assert!(content.starts_with(r#"<div class="container">"#));
        assert!(router.document().contains("todo-items").await);
        assert_eq!(router.active_module_id().await, None);
        assert_eq!(
            router.phase().await,
            Phase::Mounted(Route::Tool("todo-list".to_string()))
        );
    }

    #[tokio::test]
    async fn test_switching_tools_tears_down_before_fetching() {
        let log = Log::default();
        let source = RecordingSource {
            inner: site(),
            log: log.clone(),
        };
        let router = router(Arc::new(source), modules(&log));

        router.navigate("#snake-game").await;
        assert_eq!(router.active_module_id().await.as_deref(), Some("snake-game"));

        router.navigate("#todo-list").await;

        assert_eq!(
            entries(&log),
            vec![
                "fetch tools/snake-game.html",
                "init snake-game",
                "cleanup snake-game",
                "fetch tools/todo-list.html",
            ]
        );
        assert_eq!(router.active_module_id().await, None);
        assert!(!router.document().contains("board").await);
    }

    #[tokio::test]
    async fn test_renavigating_same_tool_reinitializes() {
        let log = Log::default();
        let router = router(Arc::new(site()), modules(&log));

        router.navigate("#snake-game").await;
        router.navigate("#snake-game").await;

        assert_eq!(
            entries(&log),
            vec!["init snake-game", "cleanup snake-game", "init snake-game"]
        );
        assert_eq!(router.active_module_id().await.as_deref(), Some("snake-game"));
    }

    #[tokio::test]
    async fn test_missing_fragment_skips_import() {
        let log = Log::default();
        let source = site();
        source.fail("tools/snake-game.html", 404);
        let router = router(Arc::new(source), modules(&log));

        let outcome = router.navigate("#snake-game").await;

        assert!(matches!(outcome, NavigationOutcome::NotFound { .. }));
        assert!(entries(&log).is_empty());
        assert_eq!(router.active_module_id().await, None);
    }

    #[tokio::test]
    async fn test_failed_teardown_does_not_block_navigation() {
        let mut modules = ModuleRegistry::new();
        modules.register("calculator", || Box::new(FailingCleanup));
        let router = router(Arc::new(site()), modules);

        router.navigate("#calculator").await;
        let outcome = router.navigate("#todo-list").await;

        assert!(matches!(outcome, NavigationOutcome::Mounted { module: false, .. }));
        assert_eq!(router.active_module_id().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_teardown_times_out() {
        let mut modules = ModuleRegistry::new();
        modules.register("calculator", || Box::new(HangingCleanup));
        let router = router(Arc::new(site()), modules);

        router.navigate("#calculator").await;
        let outcome = router.navigate("#todo-list").await;

        assert!(matches!(outcome, NavigationOutcome::Mounted { .. }));
        assert!(router.document().contains("todo-items").await);
    }

    #[tokio::test]
    async fn test_cleanup_runs_before_next_tool_is_injected() {
        let log = Log::default();
        let mut modules = ModuleRegistry::new();
        let watch_log = log.clone();
        modules.register("snake-game", move || {
            Box::new(WatchfulCleanup {
                document: None,
                log: watch_log.clone(),
            })
        });
        let router = router(Arc::new(site()), modules);

        router.navigate("#snake-game").await;
        router.navigate("#todo-list").await;

        assert_eq!(entries(&log), vec!["cleanup, todo-items mounted: false"]);
        assert!(router.document().contains("todo-items").await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_init_does_not_block_next_navigation() {
        let log = Log::default();
        let entered = Arc::new(Notify::new());
        let mut modules = ModuleRegistry::new();
        {
            let log = log.clone();
            let entered = entered.clone();
            modules.register("calculator", move || {
                Box::new(HungInit {
                    entered: entered.clone(),
                    log: log.clone(),
                })
            });
        }
        let router = Arc::new(router(Arc::new(site()), modules));

        let first = {
            let router = router.clone();
            tokio::spawn(async move { router.navigate("#calculator").await })
        };
        entered.notified().await;
        assert_eq!(router.active_module_id().await.as_deref(), Some("calculator"));

        let second = tokio::time::timeout(Duration::from_secs(60), router.navigate("#todo-list"))
            .await
            .unwrap();
        let first = first.await.unwrap();

        assert!(matches!(second, NavigationOutcome::Mounted { module: false, .. }));
        assert_eq!(
            first,
            NavigationOutcome::Mounted {
                id: "calculator".to_string(),
                module: true
            }
        );
        assert_eq!(entries(&log), vec!["cleanup calculator"]);
        assert!(router.document().contains("todo-items").await);
        assert!(!router.document().contains("display").await);
        assert_eq!(router.active_module_id().await, None);
        assert_eq!(
            router.phase().await,
            Phase::Mounted(Route::Tool("todo-list".to_string()))
        );
    }

    #[tokio::test]
    async fn test_home_view_binds_live_search() {
        let router = router(Arc::new(site()), ModuleRegistry::new());

        assert_eq!(router.navigate("").await, NavigationOutcome::Home);
        assert!(app_content(&router).await.contains("Discover 3 meticulously"));
        assert!(router.home_search().await.is_some());

        router.navigate("#todo-list").await;
        assert!(router.home_search().await.is_none());
    }

    #[tokio::test]
    async fn test_all_tools_applies_query() {
        let router = router(Arc::new(site()), ModuleRegistry::new());

        let outcome = router.navigate("#all-tools?q=cal").await;

        assert_eq!(outcome, NavigationOutcome::AllTools { results: Some(1) });
        assert_eq!(
            router
                .document()
                .value("all-tools-search-input")
                .await
                .as_deref(),
            Some("cal")
        );
        assert!(router.all_tools_page().await.is_some());
    }

    #[tokio::test]
    async fn test_all_tools_fetch_failure_shows_panel() {
        let source = site();
        source.remove("tools/all-tools.html");
        let router = router(Arc::new(source), ModuleRegistry::new());

        let outcome = router.navigate("#all-tools").await;

        assert_eq!(outcome, NavigationOutcome::AllToolsUnavailable);
        assert!(app_content(&router).await.contains(ALL_TOOLS_UNAVAILABLE));
        assert!(router.all_tools_page().await.is_none());
    }

    #[tokio::test]
    async fn test_stale_navigation_is_dropped() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let source = GatedSource {
            inner: site(),
            gated: "tools/calculator.html".to_string(),
            entered: entered.clone(),
            release: release.clone(),
        };
        let router = Arc::new(router(Arc::new(source), ModuleRegistry::new()));

        let slow = {
            let router = router.clone();
            tokio::spawn(async move { router.navigate("#calculator").await })
        };
        entered.notified().await;

        let fast = router.navigate("#todo-list").await;
        release.notify_one();
        let slow = slow.await.unwrap();

        assert!(matches!(fast, NavigationOutcome::Mounted { .. }));
        assert_eq!(slow, NavigationOutcome::Superseded);
        assert!(router.document().contains("todo-items").await);
        assert!(!router.document().contains("display").await);
    }
}
