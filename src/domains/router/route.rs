//! Route resolution.
//!
//! The hash fragment is the only routing key: empty is home, `all-tools`
//! (optionally with `?q=...`) is the listing page, anything else names a
//! tool.

use serde::Deserialize;
use tracing::debug;

use crate::core::security::validate_tool_id;

/// Reserved hash of the all-tools listing page.
pub const ALL_TOOLS_ROUTE: &str = "all-tools";

/// Where a hash fragment leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Empty hash.
    Home,
    /// The listing page, with an optional search query.
    AllTools { query: Option<String> },
    /// A tool whose fragment should be fetched.
    Tool(String),
    /// A hash that cannot name a tool; nothing is fetched for it.
    NotFound(String),
}

#[derive(Debug, Default, Deserialize)]
struct RouteQuery {
    q: Option<String>,
}

impl Route {
    /// Resolve a hash fragment, with or without its leading `#`.
    pub fn resolve(hash: &str) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        let (path, query) = match fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (fragment, None),
        };

        if path.is_empty() {
            return Self::Home;
        }

        if path == ALL_TOOLS_ROUTE {
            let query = query
                .map(|q| {
                    serde_urlencoded::from_str::<RouteQuery>(q).unwrap_or_else(|e| {
                        debug!("Ignoring malformed query {:?}: {}", q, e);
                        RouteQuery::default()
                    })
                })
                .and_then(|q| q.q);
            return Self::AllTools { query };
        }

        match validate_tool_id(path) {
            Ok(id) => Self::Tool(id.to_string()),
            Err(e) => {
                debug!("Hash {:?} cannot name a tool: {}", path, e);
                Self::NotFound(path.to_string())
            }
        }
    }

    /// The requested id: empty for home, the reserved token for the listing.
    pub fn id(&self) -> &str {
        match self {
            Self::Home => "",
            Self::AllTools { .. } => ALL_TOOLS_ROUTE,
            Self::Tool(id) | Self::NotFound(id) => id,
        }
    }
}

/// Hash of the all-tools page, carrying `query` when non-empty.
pub fn all_tools_hash(query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(q) => match serde_urlencoded::to_string([("q", q)]) {
            Ok(encoded) => format!("#{}?{}", ALL_TOOLS_ROUTE, encoded),
            Err(_) => format!("#{}", ALL_TOOLS_ROUTE),
        },
        None => format!("#{}", ALL_TOOLS_ROUTE),
    }
}
