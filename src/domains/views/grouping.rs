//! Category grouping.

use std::collections::BTreeMap;

use crate::domains::registry::ToolDescriptor;

/// Tools sharing a category, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub name: &'a str,
    pub tools: Vec<&'a ToolDescriptor>,
}

/// Group tools by category, with categories in lexicographic order.
///
/// Missing categories fall under "Uncategorized". Within a group tools keep
/// their registry order.
pub fn group_by_category(tools: &[ToolDescriptor]) -> Vec<CategoryGroup<'_>> {
    let mut groups: BTreeMap<&str, Vec<&ToolDescriptor>> = BTreeMap::new();
    for tool in tools {
        groups.entry(tool.category()).or_default().push(tool);
    }

    groups
        .into_iter()
        .map(|(name, tools)| CategoryGroup { name, tools })
        .collect()
}
