//! Document adapter.
//!
//! A minimal model of the page the router writes into: a tree of elements
//! addressed by id. View builders stay pure and return markup; this adapter
//! is the only place that markup lands.
//!
//! Replacing an element's content detaches every element that was created
//! from its previous content, then registers each `id="..."` found in the
//! new markup under its nearest enclosing element. That is how a tool's
//! subtree disappears when the next tool is mounted.
//!
//! Reading an element's content serializes it with the current content and
//! visibility of every element below it, the way `innerHTML` would.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Mount point for the shared header component.
pub const HEADER_MOUNT: &str = "header";

/// Mount point for the shared footer component.
pub const FOOTER_MOUNT: &str = "footer";

/// Main content mount, owned by the router.
pub const APP_MOUNT: &str = "app";

/// Elements that never have content or a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[derive(Debug, Clone, Default)]
struct Element {
    parent: Option<String>,
    /// Own markup; children are stored separately and spliced back on read.
    content: String,
    value: String,
    hidden: bool,
}

/// Shared handle to the page's elements.
///
/// Cloning the handle shares the same page, so a tool module can keep a
/// clone for its timers.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Arc<RwLock<HashMap<String, Element>>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A page with the fixed `header`, `footer` and `app` mount points.
    pub fn new() -> Self {
        Self::with_mounts(&[HEADER_MOUNT, APP_MOUNT, FOOTER_MOUNT])
    }

    /// A page with the given top-level mount points.
    pub fn with_mounts(mounts: &[&str]) -> Self {
        let elements = mounts
            .iter()
            .map(|id| (id.to_string(), Element::default()))
            .collect();
        Self {
            elements: Arc::new(RwLock::new(elements)),
        }
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.elements.read().await.contains_key(id)
    }

    /// Current markup of an element, including everything rendered into
    /// the elements below it.
    pub async fn content(&self, id: &str) -> Option<String> {
        let elements = self.elements.read().await;
        let element = elements.get(id)?;
        Some(render(&elements, id, &element.content))
    }

    /// Replace an element's content with `markup`.
    ///
    /// Returns `false` when the element does not exist.
    pub async fn set_content(&self, id: &str, markup: impl Into<String>) -> bool {
        let markup = markup.into();
        let mut elements = self.elements.write().await;
        if !elements.contains_key(id) {
            return false;
        }

        detach_descendants(&mut elements, id);
        register_children(&mut elements, id, &markup);

        if let Some(element) = elements.get_mut(id) {
            element.content = markup;
        }
        true
    }

    /// Replace an element's content with escaped text.
    pub async fn set_text(&self, id: &str, text: &str) -> bool {
        self.set_content(id, crate::domains::views::escape_html(text))
            .await
    }

    /// Show or hide an element.
    pub async fn set_hidden(&self, id: &str, hidden: bool) -> bool {
        match self.elements.write().await.get_mut(id) {
            Some(element) => {
                element.hidden = hidden;
                true
            }
            None => false,
        }
    }

    pub async fn is_hidden(&self, id: &str) -> Option<bool> {
        self.elements.read().await.get(id).map(|e| e.hidden)
    }

    /// Set the value of a form control.
    pub async fn set_value(&self, id: &str, value: &str) -> bool {
        match self.elements.write().await.get_mut(id) {
            Some(element) => {
                element.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub async fn value(&self, id: &str) -> Option<String> {
        self.elements.read().await.get(id).map(|e| e.value.clone())
    }
}

fn detach_descendants(elements: &mut HashMap<String, Element>, id: &str) {
    let mut frontier = vec![id.to_string()];
    while let Some(parent) = frontier.pop() {
        let children: Vec<String> = elements
            .iter()
            .filter(|(_, e)| e.parent.as_deref() == Some(parent.as_str()))
            .map(|(child_id, _)| child_id.clone())
            .collect();
        for child in children {
            elements.remove(&child);
            frontier.push(child);
        }
    }
}

fn register_children(elements: &mut HashMap<String, Element>, parent: &str, markup: &str) {
    let nodes = scan_nodes(markup);
    let mut registered = vec![false; nodes.len()];

    for (i, node) in nodes.iter().enumerate() {
        // An id that already lives elsewhere on the page keeps its owner.
        if elements.contains_key(&node.id) {
            continue;
        }

        let mut enclosing = node.parent;
        let owner = loop {
            match enclosing {
                Some(j) if registered[j] => break nodes[j].id.clone(),
                Some(j) => enclosing = nodes[j].parent,
                None => break parent.to_string(),
            }
        };

        elements.insert(
            node.id.clone(),
            Element {
                parent: Some(owner),
                content: markup[node.open_end..node.inner_end].to_string(),
                hidden: node.hidden,
                ..Element::default()
            },
        );
        registered[i] = true;
    }
}

/// Serialize `markup`, owned by `id`, with its children's current state.
fn render(elements: &HashMap<String, Element>, id: &str, markup: &str) -> String {
    let nodes = scan_nodes(markup);
    let mut spliced = vec![false; nodes.len()];
    let mut out = String::with_capacity(markup.len());
    let mut pos = 0;

    for (i, node) in nodes.iter().enumerate() {
        let inside_spliced = ancestors(&nodes, i).any(|j| spliced[j]);
        let child = elements
            .get(&node.id)
            .filter(|e| e.parent.as_deref() == Some(id));
        let Some(child) = child else {
            continue;
        };
        if inside_spliced || node.start < pos {
            continue;
        }

        out.push_str(&markup[pos..node.start]);
        out.push_str(&open_tag(
            &markup[node.start..node.open_end],
            node.hidden,
            child.hidden,
        ));
        out.push_str(&render(elements, &node.id, &child.content));
        pos = node.inner_end;
        spliced[i] = true;
    }

    out.push_str(&markup[pos..]);
    out
}

fn ancestors(nodes: &[Node], i: usize) -> impl Iterator<Item = usize> + '_ {
    std::iter::successors(nodes[i].parent, |&j| nodes[j].parent)
}

/// Rewrite an opening tag whose visibility changed since it was parsed.
fn open_tag(tag: &str, parsed_hidden: bool, hidden: bool) -> String {
    if parsed_hidden == hidden {
        return tag.to_string();
    }

    if hidden {
        if attribute_span(tag, "class").is_some() {
            return replace_attribute(tag, "class", |class| {
                if class.trim().is_empty() {
                    "d-none".to_string()
                } else {
                    format!("{} d-none", class)
                }
            });
        }
        let close = tag.len() - 1;
        let at = if tag[..close].ends_with('/') {
            close - 1
        } else {
            close
        };
        return format!("{} class=\"d-none\"{}", tag[..at].trim_end(), &tag[at..]);
    }

    let tag = replace_attribute(tag, "class", |class| {
        class
            .split_whitespace()
            .filter(|c| *c != "d-none")
            .collect::<Vec<_>>()
            .join(" ")
    });
    replace_attribute(&tag, "style", |style| {
        style
            .split(';')
            .filter(|rule| rule.replace(' ', "") != "display:none")
            .collect::<Vec<_>>()
            .join(";")
    })
}

fn replace_attribute(tag: &str, name: &str, rewrite: impl Fn(&str) -> String) -> String {
    match attribute_span(tag, name) {
        Some((start, end)) => format!(
            "{}{}{}",
            &tag[..start],
            rewrite(&tag[start..end]),
            &tag[end..]
        ),
        None => tag.to_string(),
    }
}

/// An element with an `id`, located in a piece of markup.
struct Node {
    id: String,
    hidden: bool,
    /// Offset of the opening `<`.
    start: usize,
    /// Offset just past the opening tag's `>`.
    open_end: usize,
    /// Offset of the closing tag, or `open_end` for void elements.
    inner_end: usize,
    /// Nearest enclosing node.
    parent: Option<usize>,
}

struct OpenTag {
    name: String,
    node: Option<usize>,
}

/// Find every element carrying an `id` attribute, in document order.
///
/// A tag starts hidden when its class list contains `d-none` or its inline
/// style sets `display: none`. Unclosed elements run to the end of their
/// parent.
fn scan_nodes(markup: &str) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut stack: Vec<OpenTag> = Vec::new();
    let mut pos = 0;

    while let Some(offset) = markup[pos..].find('<') {
        let start = pos + offset;
        if markup[start..].starts_with("<!--") {
            pos = markup[start..]
                .find("-->")
                .map_or(markup.len(), |end| start + end + 3);
            continue;
        }
        let Some(len) = markup[start..].find('>') else {
            break;
        };
        let open_end = start + len + 1;
        let tag = &markup[start + 1..open_end - 1];
        pos = open_end;

        if let Some(closing) = tag.strip_prefix('/') {
            let name = tag_name(closing);
            if let Some(depth) = stack.iter().rposition(|open| open.name == name) {
                for open in stack.drain(depth..) {
                    if let Some(i) = open.node {
                        nodes[i].inner_end = start;
                    }
                }
            }
            continue;
        }
        if tag.starts_with('!') || tag.starts_with('?') {
            continue;
        }

        let name = tag_name(tag);
        let node = attribute(tag, "id").map(|id| {
            nodes.push(Node {
                id: id.to_string(),
                hidden: tag_hidden(tag),
                start,
                open_end,
                inner_end: open_end,
                parent: stack.iter().rev().find_map(|open| open.node),
            });
            nodes.len() - 1
        });

        if !tag.ends_with('/') && !VOID_TAGS.contains(&name.as_str()) {
            stack.push(OpenTag { name, node });
        }
    }

    for open in stack {
        if let Some(i) = open.node {
            nodes[i].inner_end = markup.len();
        }
    }
    nodes
}

fn tag_name(tag: &str) -> String {
    tag.split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn tag_hidden(tag: &str) -> bool {
    attribute(tag, "class").is_some_and(|class| class.split_whitespace().any(|c| c == "d-none"))
        || attribute(tag, "style")
            .is_some_and(|style| style.replace(' ', "").contains("display:none"))
}

fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    attribute_span(tag, name).map(|(start, end)| &tag[start..end])
}

/// Byte range of an attribute's quoted value.
fn attribute_span(tag: &str, name: &str) -> Option<(usize, usize)> {
    let needle = format!("{}=\"", name);
    let mut search_from = 0;
    while let Some(pos) = tag[search_from..].find(&needle) {
        let at = search_from + pos;
        let boundary = at == 0 || tag[..at].ends_with(char::is_whitespace);
        let value_start = at + needle.len();
        if boundary {
            let value_len = tag[value_start..].find('"')?;
            return Some((value_start, value_start + value_len));
        }
        search_from = value_start;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_mounts_exist() {
        let doc = Document::new();
        assert!(doc.contains(HEADER_MOUNT).await);
        assert!(doc.contains(APP_MOUNT).await);
        assert!(doc.contains(FOOTER_MOUNT).await);
        assert!(!doc.contains("sidebar").await);
    }

    #[tokio::test]
    async fn test_set_content_registers_children() {
        let doc = Document::new();
        doc.set_content(
            APP_MOUNT,
            r#"<div class="container"><span id="score">0</span><p id="status" class="small d-none">over</p></div>"#,
        )
        .await;

        assert!(doc.contains("score").await);
        assert_eq!(doc.is_hidden("score").await, Some(false));
        assert_eq!(doc.is_hidden("status").await, Some(true));
        assert_eq!(doc.content("score").await.as_deref(), Some("0"));
    }

    #[tokio::test]
    async fn test_replacing_content_detaches_previous_subtree() {
        let doc = Document::new();
        doc.set_content(APP_MOUNT, r#"<div id="board"></div>"#).await;
        doc.set_content("board", r#"<canvas id="snake-canvas"></canvas>"#)
            .await;
        assert!(doc.contains("snake-canvas").await);

        doc.set_content(APP_MOUNT, r#"<ul id="todo-items"></ul>"#).await;

        assert!(!doc.contains("board").await);
        assert!(!doc.contains("snake-canvas").await);
        assert!(doc.contains("todo-items").await);
        assert!(!doc.set_content("snake-canvas", "late frame").await);
    }

    #[tokio::test]
    async fn test_replacing_nested_content_keeps_siblings() {
        let doc = Document::new();
        doc.set_content(
            APP_MOUNT,
            r#"<div id="board"><span id="cell"></span></div><p id="score">0</p>"#,
        )
        .await;

        doc.set_content("board", "<canvas></canvas>").await;

        assert!(!doc.contains("cell").await);
        assert!(doc.contains("score").await);
    }

    #[tokio::test]
    async fn test_content_includes_nested_updates() {
        let doc = Document::new();
        doc.set_content(
            APP_MOUNT,
            r#"<section><input id="q"><div id="grid" class="row"></div></section><p>end</p>"#,
        )
        .await;
        doc.set_content("grid", r#"<div class="card" id="card-1"></div>"#)
            .await;
        doc.set_content("card-1", "Calculator").await;

        assert_eq!(
            doc.content(APP_MOUNT).await.as_deref(),
            Some(
                r#"<section><input id="q"><div id="grid" class="row"><div class="card" id="card-1">Calculator</div></div></section><p>end</p>"#
            )
        );
    }

    #[tokio::test]
    async fn test_content_reflects_visibility() {
        let doc = Document::new();
        doc.set_content(
            APP_MOUNT,
            r#"<p id="empty" class="d-none">None</p><div id="menu" style="display: none;"></div><span id="tip">?</span>"#,
        )
        .await;

        doc.set_hidden("empty", false).await;
        doc.set_hidden("menu", false).await;
        doc.set_hidden("tip", true).await;

        let html = doc.content(APP_MOUNT).await.unwrap();
        assert!(html.contains(r#"<p id="empty" class="">None</p>"#));
        assert!(html.contains(r#"<div id="menu" style="">"#));
        assert!(html.contains(r#"<span id="tip" class="d-none">?</span>"#));
    }

    #[tokio::test]
    async fn test_existing_ids_are_not_stolen() {
        let doc = Document::new();
        doc.set_content(APP_MOUNT, r#"<div id="header">impostor</div>"#)
            .await;
        doc.set_content(APP_MOUNT, "").await;

        assert!(doc.contains(HEADER_MOUNT).await);
    }

    #[tokio::test]
    async fn test_set_text_escapes_markup() {
        let doc = Document::new();
        doc.set_text(APP_MOUNT, "<b>bold</b>").await;

        assert_eq!(
            doc.content(APP_MOUNT).await.as_deref(),
            Some("&lt;b&gt;bold&lt;/b&gt;")
        );
    }

    #[test]
    fn test_attribute_requires_boundary() {
        assert_eq!(attribute(r#"div data-id="x" id="y""#, "id"), Some("y"));
        assert_eq!(attribute(r#"div data-id="x""#, "id"), None);
        assert_eq!(
            attribute(r#"div style="display: none;" id="home-list""#, "style"),
            Some("display: none;")
        );
    }

    #[test]
    fn test_scan_tracks_nesting() {
        let nodes =
            scan_nodes(r#"<ul id="list"><li id="a">A<br></li><li>B</li></ul><img id="logo">"#);

        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["list", "a", "logo"]);
        assert_eq!(nodes[1].parent, Some(0));
        assert_eq!(nodes[2].parent, None);
        assert_eq!(nodes[2].inner_end, nodes[2].open_end);
    }
}
