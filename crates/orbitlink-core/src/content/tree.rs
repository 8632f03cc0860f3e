//! Validated content tree and id lookup

use std::collections::HashSet;

use crate::content::ContentNode;
use crate::error::{SiteError, SiteResult};

const BUILTIN_TREE: &str = include_str!("../../data/planet_tree.json");

/// Result of looking a node up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLookup<'a> {
    pub node: &'a ContentNode,
    /// Id of the immediate parent, `None` for the root
    pub parent_id: Option<&'a str>,
}

/// Immutable content tree with globally unique, non-empty ids.
///
/// Validation happens once in [`ContentTree::new`]; after that lookups can
/// rely on ids being unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTree {
    root: ContentNode,
    len: usize,
}

impl ContentTree {
    /// Validate a root node and wrap it.
    pub fn new(root: ContentNode) -> SiteResult<Self> {
        let mut seen = HashSet::new();
        validate(&root, &mut seen, "root")?;
        Ok(Self {
            len: seen.len(),
            root,
        })
    }

    /// Parse and validate a JSON content document.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let root: ContentNode = serde_json::from_str(json)?;
        Self::new(root)
    }

    /// The site's embedded content tree.
    pub fn builtin() -> SiteResult<Self> {
        Self::from_json(BUILTIN_TREE)
    }

    pub fn root(&self) -> &ContentNode {
        &self.root
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Depth-first search by id. Returns the first match and its parent.
    pub fn find(&self, id: &str) -> Option<NodeLookup<'_>> {
        find_in(&self.root, id, None)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn node(&self, id: &str) -> Option<&ContentNode> {
        self.find(id).map(|found| found.node)
    }

    pub fn parent_id_of(&self, id: &str) -> Option<&str> {
        self.find(id).and_then(|found| found.parent_id)
    }
}

fn find_in<'a>(
    node: &'a ContentNode,
    id: &str,
    parent_id: Option<&'a str>,
) -> Option<NodeLookup<'a>> {
    if node.id == id {
        return Some(NodeLookup { node, parent_id });
    }
    node.children
        .iter()
        .find_map(|child| find_in(child, id, Some(node.id.as_str())))
}

fn validate<'a>(
    node: &'a ContentNode,
    seen: &mut HashSet<&'a str>,
    path: &str,
) -> SiteResult<()> {
    if node.id.trim().is_empty() {
        return Err(SiteError::EmptyNodeId {
            path: path.to_string(),
        });
    }
    if !seen.insert(node.id.as_str()) {
        return Err(SiteError::DuplicateNodeId(node.id.clone()));
    }
    for (index, child) in node.children.iter().enumerate() {
        validate(child, seen, &format!("{}/{}[{}]", path, node.id, index))?;
    }
    Ok(())
}
