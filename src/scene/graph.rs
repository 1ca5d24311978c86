//! Scene tree storage.
//!
//! [`SceneGraph`] owns every node in a slotmap arena and maintains the
//! parent/child links between them. The root node is created at
//! construction and lives for the whole graph, so callers hold an explicit
//! graph value instead of reaching for a global scene singleton.
//!
//! Keys are generational: once a node is removed, its key stops resolving
//! instead of dangling, which is what makes them safe to hand out as weak
//! references.

use log::warn;
use slotmap::{SlotMap, new_key_type};

use crate::scene::node::{Node, NodeKind};

new_key_type! {
    /// Generational key addressing one node in a [`SceneGraph`].
    pub struct NodeKey;
}

/// Arena of scene nodes plus the tree links between them.
///
/// Nodes may be linked under the root, under each other, or left unlinked
/// (orphans); removal is always explicit via [`SceneGraph::remove_subtree`].
#[derive(Clone, Debug)]
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, Node>,
    root: NodeKey,
}

impl SceneGraph {
    /// Create a graph holding only the scene root.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(NodeKind::SceneRoot, "scene"));
        Self { nodes, root }
    }

    /// Key of the scene root node.
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Insert a node as an orphan (no parent, no children) and return its key.
    pub fn insert(&mut self, mut node: Node) -> NodeKey {
        node.parent = None;
        node.children.clear();
        self.nodes.insert(node)
    }

    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Total node count, including the root and any orphans.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parent key of `key`, or `None` for the root, orphans, and stale keys.
    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(|n| n.parent)
    }

    /// Direct children of `key`; empty for leaves and stale keys.
    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        match self.nodes.get(key) {
            Some(node) => node.children.as_slice(),
            None => &[],
        }
    }

    /// Link `child` under `parent`, unlinking it from any previous parent.
    ///
    /// No-op (with a warning) if either key is stale, if `child` is the
    /// root, or if the link would create a cycle.
    pub fn link(&mut self, child: NodeKey, parent: NodeKey) {
        if child == self.root {
            warn!("refusing to reparent the scene root");
            return;
        }
        if !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            warn!("link with stale node key ignored");
            return;
        }
        if self.walk(child).contains(&parent) {
            warn!("refusing to link a node under its own subtree");
            return;
        }
        self.unlink(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Remove `key` from its parent's child list and clear its parent link.
    /// Safe to call on orphans and stale keys.
    pub fn unlink(&mut self, key: NodeKey) {
        let Some(parent) = self.nodes.get(key).and_then(|n| n.parent) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.retain(|c| *c != key);
        }
        self.nodes[key].parent = None;
    }

    /// Unlink `key` and delete it together with all of its descendants.
    /// Returns the number of nodes removed. The root cannot be removed.
    pub fn remove_subtree(&mut self, key: NodeKey) -> usize {
        if key == self.root {
            warn!("refusing to remove the scene root subtree");
            return 0;
        }
        if !self.nodes.contains_key(key) {
            return 0;
        }
        self.unlink(key);
        let doomed = self.walk(key);
        for k in &doomed {
            self.nodes.remove(*k);
        }
        doomed.len()
    }

    /// Pre-order walk of the subtree rooted at `key`, including `key`
    /// itself. Empty for stale keys.
    pub fn walk(&self, key: NodeKey) -> Vec<NodeKey> {
        let mut out = Vec::new();
        if !self.nodes.contains_key(key) {
            return out;
        }
        let mut stack = vec![key];
        while let Some(k) = stack.pop() {
            out.push(k);
            if let Some(node) = self.nodes.get(k) {
                // Reverse so the leftmost child is visited first.
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
