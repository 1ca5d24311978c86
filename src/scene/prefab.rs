//! Node specifications consumed by attachment.
//!
//! A [`NodePrefab`] describes the node to create for an entity: either a
//! prebuilt [`Node`] value or just a [`NodeKind`] to construct from, plus a
//! dotted-path property map and an optional list of child prefabs. Prefabs
//! derive `Deserialize`, so whole subtrees can be described in JSON data
//! files and loaded with `serde_json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::scene::node::{Node, NodeKind};

/// Where the node itself comes from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum NodeSource {
    /// Construct a fresh node of this kind, named after its kind label.
    Kind(NodeKind),
    /// Use this prebuilt node as-is.
    Node(Node),
}

/// Specification for one node subtree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodePrefab {
    pub source: NodeSource,
    /// Dotted-path property map applied to the node after construction.
    #[serde(default)]
    pub props: Map<String, Value>,
    /// Child subtrees created under the node. Children belong to the same
    /// entity; give a child its own entity by attaching it separately with
    /// a parent entity instead.
    #[serde(default)]
    pub children: Vec<NodePrefab>,
}

impl NodePrefab {
    pub fn from_kind(kind: NodeKind) -> Self {
        Self {
            source: NodeSource::Kind(kind),
            props: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn from_node(node: Node) -> Self {
        Self {
            source: NodeSource::Node(node),
            props: Map::new(),
            children: Vec::new(),
        }
    }

    /// Add one property entry; convenient for building prefabs in code.
    pub fn with_prop(mut self, path: impl Into<String>, value: Value) -> Self {
        self.props.insert(path.into(), value);
        self
    }

    /// Add a child subtree.
    pub fn with_child(mut self, child: NodePrefab) -> Self {
        self.children.push(child);
        self
    }

    /// Build the node described by the source (children and props are
    /// handled by the attachment operation).
    pub(crate) fn build_node(source: NodeSource) -> Node {
        match source {
            NodeSource::Kind(kind) => Node::new(kind, kind.label()),
            NodeSource::Node(node) => node,
        }
    }
}
