//! Page components domain module.
//!
//! Shared page chrome (header, footer) is fetched as HTML fragments and
//! injected into fixed mount points. A failed component leaves its mount
//! empty and never stops startup.

mod loader;

pub use loader::ComponentLoader;
