//! Nested tree views over the flat node listing.
//!
//! The store returns nodes as a flat list in sibling order; depth and
//! nesting are derived here from the materialized paths.

use serde::{Deserialize, Serialize};

use notehub_core::path;
use notehub_entity::node::Node;

/// A node with its children nested, for tree-shaped display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// The node itself.
    #[serde(flatten)]
    pub node: Node,
    /// Depth below the root; top-level nodes are 0.
    pub depth: usize,
    /// Child nodes in sibling order.
    pub children: Vec<TreeNode>,
}

/// Nest a flat, sibling-ordered node list into a forest.
///
/// Children follow their parents because the input is sorted by
/// `parent_path`-equality lookups, so a single pass over a parent index
/// is enough.
pub fn nest(nodes: &[Node]) -> Vec<TreeNode> {
    fn children_of(parent_path: &str, nodes: &[Node]) -> Vec<TreeNode> {
        nodes
            .iter()
            .filter(|n| n.parent_path == parent_path)
            .map(|n| TreeNode {
                node: n.clone(),
                depth: path::depth(&n.path),
                children: children_of(&n.path, nodes),
            })
            .collect()
    }

    children_of(path::ROOT, nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use notehub_entity::node::NodeKind;

    fn node(kind: NodeKind, node_path: &str) -> Node {
        let (parent_path, name) = path::split_path(node_path);
        let now = Utc::now();
        Node {
            id: node_path.to_string(),
            kind,
            name,
            path: node_path.to_string(),
            parent_path,
            content: String::new(),
            is_daily: false,
            sort_order: 0,
            created: now,
            updated: now,
        }
    }

    #[test]
    fn test_nest_builds_forest() {
        let nodes = vec![
            node(NodeKind::Folder, "/a"),
            node(NodeKind::Folder, "/a/b"),
            node(NodeKind::File, "/a/b/c.md"),
            node(NodeKind::File, "/top.md"),
        ];

        let forest = nest(&nodes);
        assert_eq!(forest.len(), 2);

        let a = &forest[0];
        assert_eq!(a.node.path, "/a");
        assert_eq!(a.depth, 0);
        assert_eq!(a.children.len(), 1);
        assert_eq!(a.children[0].node.path, "/a/b");
        assert_eq!(a.children[0].children[0].node.path, "/a/b/c.md");
        assert_eq!(a.children[0].children[0].depth, 2);
    }

    #[test]
    fn test_nest_empty() {
        assert!(nest(&[]).is_empty());
    }
}
