//! Configuration management for the tool suite.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::source::SourceConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Main configuration structure.
///
/// Organized by concern: where the site lives, how it is laid out, and how
/// the navigation views and search behave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site identification.
    pub site: SiteConfig,

    /// Site-relative locations of components, tool fragments and the registry.
    pub paths: PathsConfig,

    /// Where site content is fetched from.
    pub source: SourceConfig,

    /// Response cache in front of the content source.
    pub cache: CacheConfig,

    /// Search behavior.
    pub search: SearchConfig,

    /// Navigation view settings.
    pub views: ViewsConfig,

    /// Router lifecycle settings.
    pub router: RouterConfig,

    /// Persisted local storage.
    pub storage: StorageConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Site identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// The name of the site, used in log output.
    pub name: String,

    /// The version of the site shell.
    pub version: String,
}

/// Site-relative paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the header/footer components.
    pub components_dir: String,

    /// Directory holding `<id>.html` tool fragments (and `all-tools.html`).
    pub tools_html_dir: String,

    /// Directory holding `<id>.js` tool behavior scripts.
    pub tools_script_dir: String,

    /// The tool registry JSON document.
    pub registry: String,
}

/// Response cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Serve repeated fetches from memory.
    pub enabled: bool,

    /// Cache name, used in log output.
    pub name: String,
}

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before the homepage search re-filters, in milliseconds.
    pub debounce_ms: u64,

    /// Maximum number of entries in the homepage dropdown.
    pub dropdown_limit: usize,
}

/// Navigation view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewsConfig {
    /// Number of registry entries shown in the "Recently Added" grid.
    pub recent_limit: usize,
}

/// Router configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Upper bound on how long a tool's teardown hook may hold up navigation.
    pub teardown_timeout_ms: u64,
}

/// Persisted storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing local storage. `None` keeps state in memory only.
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            components_dir: "components".to_string(),
            tools_html_dir: "tools".to_string(),
            tools_script_dir: "js/tools".to_string(),
            registry: "js/tools.json".to_string(),
        }
    }
}

impl PathsConfig {
    /// Path of a shared page component such as `header`.
    pub fn component(&self, name: &str) -> String {
        format!("{}/{}.html", self.components_dir, name)
    }

    /// Path of a tool's HTML fragment.
    pub fn tool_html(&self, id: &str) -> String {
        format!("{}/{}.html", self.tools_html_dir, id)
    }

    /// Path of a tool's behavior script.
    pub fn tool_script(&self, id: &str) -> String {
        format!("{}/{}.js", self.tools_script_dir, id)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            name: "toolverse-v1".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            dropdown_limit: 7,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self { recent_limit: 8 }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            teardown_timeout_ms: 5000,
        }
    }
}

impl RouterConfig {
    pub fn teardown_timeout(&self) -> Duration {
        Duration::from_millis(self.teardown_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig {
                name: "toolverse".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            paths: PathsConfig::default(),
            source: SourceConfig::default(),
            cache: CacheConfig::default(),
            search: SearchConfig::default(),
            views: ViewsConfig::default(),
            router: RouterConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `TOOLVERSE_`.
    /// For example: `TOOLVERSE_SITE_NAME`, `TOOLVERSE_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("TOOLVERSE_SITE_NAME") {
            config.site.name = name;
        }

        if let Ok(level) = std::env::var("TOOLVERSE_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(dir) = std::env::var("TOOLVERSE_COMPONENTS_DIR") {
            config.paths.components_dir = dir;
        }

        if let Ok(dir) = std::env::var("TOOLVERSE_TOOLS_HTML_DIR") {
            config.paths.tools_html_dir = dir;
        }

        if let Ok(dir) = std::env::var("TOOLVERSE_TOOLS_SCRIPT_DIR") {
            config.paths.tools_script_dir = dir;
        }

        if let Ok(path) = std::env::var("TOOLVERSE_REGISTRY_PATH") {
            config.paths.registry = path;
        }

        if let Ok(debounce) = std::env::var("TOOLVERSE_SEARCH_DEBOUNCE_MS") {
            match debounce.parse() {
                Ok(ms) => config.search.debounce_ms = ms,
                Err(_) => warn!(
                    "Ignoring invalid TOOLVERSE_SEARCH_DEBOUNCE_MS value {:?}",
                    debounce
                ),
            }
        }

        if let Ok(timeout) = std::env::var("TOOLVERSE_TEARDOWN_TIMEOUT_MS") {
            match timeout.parse() {
                Ok(ms) => config.router.teardown_timeout_ms = ms,
                Err(_) => warn!(
                    "Ignoring invalid TOOLVERSE_TEARDOWN_TIMEOUT_MS value {:?}",
                    timeout
                ),
            }
        }

        config.source = SourceConfig::from_env();

        if let Ok(enabled) = std::env::var("TOOLVERSE_CACHE_ENABLED") {
            config.cache.enabled = !matches!(enabled.to_lowercase().as_str(), "0" | "false" | "no");
        }

        if let Ok(path) = std::env::var("TOOLVERSE_STORAGE_PATH") {
            config.storage.path = Some(PathBuf::from(path));
            info!("Local storage persisted to {:?}", config.storage.path);
        } else {
            warn!(
                "TOOLVERSE_STORAGE_PATH not set - favorites and theme \
                 will not survive a restart"
            );
        }

        config
    }
}
