//! Owning reference from an entity to its scene-graph node.
//!
//! An entity holds at most one [`SceneNodeRef`] at a time. The reference is
//! the ownership edge: tearing the entity down tears the node subtree down
//! with it. The reverse direction (node to entity) is deliberately not
//! stored here; see
//! [`NodeEntityMap`](crate::resources::nodemap::NodeEntityMap).

use bevy_ecs::prelude::Component;

use crate::scene::graph::NodeKey;

/// Component linking an entity to the one scene-graph node it owns.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneNodeRef {
    key: NodeKey,
}

impl SceneNodeRef {
    pub(crate) fn new(key: NodeKey) -> Self {
        Self { key }
    }

    /// Key of the owned node.
    pub fn key(&self) -> NodeKey {
        self.key
    }
}
