//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents one concern of the tool suite: the registry,
//! page chrome, navigation views, search, routing, local storage, and the
//! built-in tool behavior modules.

pub mod components;
pub mod registry;
pub mod router;
pub mod search;
pub mod storage;
pub mod tools;
pub mod views;
