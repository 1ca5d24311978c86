//! Node-to-entity side table.
//!
//! The reverse direction of [`SceneNodeRef`](crate::components::scenenode::SceneNodeRef):
//! given a node key found while traversing the graph, which entity owns it?
//! Kept as a map owned by the synchronizer instead of a mutable field on
//! the nodes themselves. Entries are strictly non-owning annotations used
//! to route subtree teardown back into the ECS; they never extend a node's
//! or an entity's lifetime.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

use crate::scene::graph::NodeKey;

/// Weak node-key → entity lookup table.
#[derive(Resource, Debug, Default)]
pub struct NodeEntityMap {
    map: FxHashMap<NodeKey, Entity>,
}

impl NodeEntityMap {
    pub fn insert(&mut self, key: NodeKey, entity: Entity) {
        self.map.insert(key, entity);
    }

    /// Entity annotated on `key`, if any.
    pub fn get(&self, key: NodeKey) -> Option<Entity> {
        self.map.get(&key).copied()
    }

    /// Remove and return the annotation for `key`.
    pub fn take(&mut self, key: NodeKey) -> Option<Entity> {
        self.map.remove(&key)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.map.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::graph::SceneGraph;
    use crate::scene::node::{Node, NodeKind};
    use bevy_ecs::prelude::World;

    #[test]
    fn test_insert_get_take() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut graph = SceneGraph::new();
        let key = graph.insert(Node::new(NodeKind::Group, "rig"));

        let mut map = NodeEntityMap::default();
        map.insert(key, entity);
        assert_eq!(map.get(key), Some(entity));
        assert_eq!(map.take(key), Some(entity));
        assert_eq!(map.take(key), None);
        assert!(map.is_empty());
    }
}
