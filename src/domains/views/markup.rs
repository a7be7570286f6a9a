//! Escaping and small shared fragments.

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Anchor id for a category section on the home page.
///
/// Every character outside `[A-Za-z0-9]` becomes `-`, then the result is
/// lowercased: `"Health & Fitness"` becomes `category-health---fitness`.
pub fn category_anchor_id(category: &str) -> String {
    let slug: String = category
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("category-{}", slug)
}

/// Inline error panel for the main content mount.
pub fn error_panel(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger">{}</div>"#,
        escape_html(message)
    )
}

/// Error panel shown when a tool's fragment cannot be fetched.
pub fn tool_not_found_panel(id: &str) -> String {
    error_panel(&format!("Tool \"{}\" not found.", id))
}

/// Wrap a tool fragment in the standard layout container.
pub fn wrap_tool_fragment(html: &str) -> String {
    format!("<div class=\"container\">\n{}\n</div>", html)
}
