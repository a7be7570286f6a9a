//! Favorites set.
//!
//! Stored as a JSON array of tool ids under [`FAVORITES_KEY`]. Only an
//! explicit toggle changes it.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use super::backend::KeyValueStore;
use super::error::StorageResult;
use crate::domains::views::FavoriteIcon;

/// Storage key of the favorites array.
pub const FAVORITES_KEY: &str = "favorites";

/// Read and toggle the persisted favorites set.
pub trait FavoritesRepository: Send + Sync {
    /// The current set of favorite tool ids.
    fn get(&self) -> HashSet<String>;

    /// Add `id` if absent, remove it if present, and persist the result.
    ///
    /// Returns whether `id` is a favorite afterwards.
    fn toggle(&self, id: &str) -> StorageResult<bool>;

    fn is_favorite(&self, id: &str) -> bool {
        self.get().contains(id)
    }
}

/// Favorites kept in a [`KeyValueStore`].
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored ids in the order they were added.
    fn load(&self) -> Vec<String> {
        match self.store.get(FAVORITES_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("Ignoring unreadable favorites: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read favorites: {}", e);
                Vec::new()
            }
        }
    }

    /// Handle a click on a favorite control carrying `tool_id`.
    ///
    /// Returns the icon state that control should switch to; other
    /// controls on the page are left alone.
    pub fn click(&self, tool_id: &str) -> StorageResult<FavoriteIcon> {
        self.toggle(tool_id).map(FavoriteIcon::for_state)
    }
}

impl FavoritesRepository for FavoritesStore {
    fn get(&self) -> HashSet<String> {
        self.load().into_iter().collect()
    }

    fn toggle(&self, id: &str) -> StorageResult<bool> {
        let mut ids = self.load();
        let now_favorite = match ids.iter().position(|f| f == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        };

        self.store
            .set(FAVORITES_KEY, &serde_json::to_string(&ids)?)?;
        debug!("Favorite {} -> {}", id, now_favorite);
        Ok(now_favorite)
    }
}
