//! Navigation menu tree.

use std::collections::HashMap;

use serde::Serialize;

use crate::metadata::DocumentMeta;

/// Node of the navigation menu.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    /// Front matter attributes.
    pub attrs: DocumentMeta,
    /// Path of the source file relative to the docs root, with extension.
    pub filename: String,
    /// Canonical URL path of the page.
    pub slug: String,
    /// Whether the file has a body after its front matter.
    pub has_content: bool,
    /// Child pages.
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Slug of the node's parent, empty for top-level nodes.
    #[must_use]
    pub fn parent_slug(&self) -> &str {
        self.slug.rsplit_once('/').map_or("", |(parent, _)| parent)
    }
}

/// Assemble menu entries into a tree.
///
/// Entries are processed in slug order, so a parent is always registered
/// before its children. A node whose parent slug is not registered is an
/// orphan: it is dropped along with its descendants and reported with a
/// warning. The top level and each top-level node's children are sorted by
/// `order`, with undeclared or falsy orders last; deeper levels keep slug
/// order.
#[must_use]
pub fn build_tree(mut entries: Vec<MenuNode>) -> Vec<MenuNode> {
    entries.sort_by(|a, b| a.slug.cmp(&b.slug));

    let mut registry: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
    let mut roots = Vec::new();

    for (idx, entry) in entries.iter().enumerate() {
        registry.insert(entry.slug.clone(), idx);

        let parent_slug = entry.parent_slug();
        if parent_slug.is_empty() {
            roots.push(idx);
        } else if let Some(&parent) = registry.get(parent_slug) {
            children[parent].push(idx);
        } else {
            tracing::warn!(
                slug = %entry.slug,
                parent = %parent_slug,
                filename = %entry.filename,
                "Dropping menu entry without parent"
            );
        }
    }

    let mut slots: Vec<Option<MenuNode>> = entries.into_iter().map(Some).collect();
    let mut tree: Vec<MenuNode> = roots
        .into_iter()
        .filter_map(|idx| assemble(idx, &mut slots, &children))
        .collect();

    tree.sort_by(|a, b| a.attrs.cmp_order(&b.attrs));
    for category in &mut tree {
        category.children.sort_by(|a, b| a.attrs.cmp_order(&b.attrs));
    }

    tree
}

/// Move node `idx` and its registered descendants out of `slots`.
fn assemble(idx: usize, slots: &mut [Option<MenuNode>], children: &[Vec<usize>]) -> Option<MenuNode> {
    let mut node = slots[idx].take()?;
    node.children = children[idx]
        .iter()
        .filter_map(|&child| assemble(child, slots, children))
        .collect();
    Some(node)
}
