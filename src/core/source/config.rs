//! Content source configuration types.

use serde::{Deserialize, Serialize};

/// Content source configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    /// Site served from a local directory.
    #[cfg(feature = "fs")]
    Fs(FsConfig),

    /// Site fetched from a remote origin.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Filesystem source configuration.
#[cfg(feature = "fs")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FsConfig {
    /// Site root directory.
    #[serde(default = "default_root")]
    pub root: std::path::PathBuf,
}

/// HTTP source configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Origin the site is served from, e.g. `https://example.org/suite/`.
    pub base_url: String,
}

#[cfg(feature = "fs")]
fn default_root() -> std::path::PathBuf {
    std::path::PathBuf::from(".")
}

#[cfg(feature = "http")]
fn default_base_url() -> String {
    "http://127.0.0.1:8080/".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        #[cfg(feature = "fs")]
        {
            return Self::Fs(FsConfig::default());
        }

        #[cfg(all(not(feature = "fs"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "fs", feature = "http")))]
        {
            compile_error!("At least one source feature must be enabled: fs or http");
        }
    }
}

#[cfg(feature = "fs")]
impl Default for FsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl SourceConfig {
    /// Create a filesystem source config.
    #[cfg(feature = "fs")]
    pub fn fs(root: impl Into<std::path::PathBuf>) -> Self {
        Self::Fs(FsConfig { root: root.into() })
    }

    /// Create an HTTP source config.
    #[cfg(feature = "http")]
    pub fn http(base_url: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            base_url: base_url.into(),
        })
    }

    /// Load source config from environment variables.
    pub fn from_env() -> Self {
        let source = std::env::var("TOOLVERSE_SOURCE")
            .unwrap_or_default()
            .to_lowercase();

        match source.as_str() {
            #[cfg(feature = "http")]
            "http" => {
                let base_url =
                    std::env::var("TOOLVERSE_BASE_URL").unwrap_or_else(|_| default_base_url());
                Self::Http(HttpConfig { base_url })
            }
            #[cfg(feature = "fs")]
            _ => {
                let root = std::env::var("TOOLVERSE_SITE_ROOT")
                    .map(std::path::PathBuf::from)
                    .unwrap_or_else(|_| default_root());
                Self::Fs(FsConfig { root })
            }
            #[cfg(all(not(feature = "fs"), feature = "http"))]
            _ => Self::Http(HttpConfig::default()),
        }
    }

    /// Get a description of this source for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "fs")]
            Self::Fs(cfg) => format!("filesystem at {}", cfg.root.display()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP origin {}", cfg.base_url),
        }
    }
}
