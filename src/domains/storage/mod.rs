//! Persisted local storage domain module.
//!
//! A small key/value store stands in for the browser's local storage; the
//! favorites set and the theme preference are kept in it under fixed keys.
//!
//! ## Architecture
//!
//! - `backend.rs` - The `KeyValueStore` trait with memory and JSON-file backends
//! - `favorites.rs` - Favorites set (`favorites` key)
//! - `theme.rs` - Light/dark theme preference (`theme` key)
//! - `error.rs` - Storage error types

mod backend;
mod error;
mod favorites;
mod theme;

pub use backend::{JsonFileStore, KeyValueStore, MemoryStore};
pub use error::{StorageError, StorageResult};
pub use favorites::{FAVORITES_KEY, FavoritesRepository, FavoritesStore};
pub use theme::{THEME_KEY, Theme, ThemeStore};
