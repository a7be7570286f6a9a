//! Theme preference.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::backend::KeyValueStore;
use super::error::StorageResult;

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Markup of the toggle button: the icon of the theme it switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => r#"<i class="fa-solid fa-sun"></i>"#,
            Self::Light => r#"<i class="fa-solid fa-moon"></i>"#,
        }
    }
}

/// Theme preference kept in a [`KeyValueStore`].
#[derive(Clone)]
pub struct ThemeStore {
    store: Arc<dyn KeyValueStore>,
}

impl ThemeStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored theme; dark when unset or unrecognized.
    pub fn current(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Could not read theme preference: {}", e);
                Theme::default()
            }
        }
    }

    /// Switch to the other theme and persist it.
    pub fn toggle(&self) -> StorageResult<Theme> {
        let next = self.current().toggled();
        self.store.set(THEME_KEY, next.as_str())?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::storage::MemoryStore;

    #[test]
    fn test_defaults_to_dark() {
        let themes = ThemeStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(themes.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let backend = Arc::new(MemoryStore::new());
        let themes = ThemeStore::new(backend.clone());

        assert_eq!(themes.toggle().unwrap(), Theme::Light);
        assert_eq!(backend.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert!(themes.current().toggle_icon().contains("fa-moon"));

        assert_eq!(themes.toggle().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let backend = Arc::new(MemoryStore::new());
        backend.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemeStore::new(backend).current(), Theme::Dark);
    }
}
