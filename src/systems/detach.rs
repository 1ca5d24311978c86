//! Node detachment.
//!
//! [`detach_object`] severs the link between an entity and its scene node:
//! the node is unlinked from the tree, the [`SceneNodeRef`] and every
//! subtype tag leave the entity, and the back-reference is cleared. The
//! orphaned subtree stays in the graph, addressable through the returned
//! key, until removed explicitly.

use bevy_ecs::prelude::{Entity, World};
use log::debug;

use crate::components::scenenode::SceneNodeRef;
use crate::components::tags::ObjectTags;
use crate::resources::nodemap::NodeEntityMap;
use crate::resources::scenegraph::SceneGraphRes;
use crate::scene::graph::NodeKey;

/// Take the scene node away from `entity`.
///
/// With `unparent` set the node is unlinked from whatever parent it has;
/// without it, only a node sitting directly under the scene root is
/// unlinked (a nested node keeps its place in the tree). Either way the
/// entity ends up with no node reference and no subtype tags.
///
/// Silent no-op returning `None` when the entity has no node. Otherwise
/// returns the key of the now-orphaned subtree.
pub fn detach_object(world: &mut World, entity: Entity, unparent: bool) -> Option<NodeKey> {
    let key = world.get::<SceneNodeRef>(entity).map(|r| r.key())?;

    {
        let mut graph_res = world.resource_mut::<SceneGraphRes>();
        let graph = &mut graph_res.0;
        if unparent || graph.parent(key) == Some(graph.root()) {
            graph.unlink(key);
        }
    }

    {
        let mut e = world.entity_mut(entity);
        e.remove::<SceneNodeRef>();
        e.remove::<ObjectTags>();
    }
    world.resource_mut::<NodeEntityMap>().take(key);

    debug!("detached node from entity {entity:?}");
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tags;
    use crate::resources::insert_scene_resources;
    use crate::scene::node::{MeshKind, NodeKind};
    use crate::scene::prefab::NodePrefab;
    use crate::systems::attach::attach_object;
    use crate::systems::lookup::object_of;

    fn test_world() -> World {
        let mut world = World::new();
        insert_scene_resources(&mut world);
        world
    }

    #[test]
    fn test_detach_clears_reference_tags_and_backref() {
        let mut world = test_world();
        let entity = world.spawn_empty().id();
        attach_object(
            &mut world,
            entity,
            NodePrefab::from_kind(NodeKind::Mesh(MeshKind::Skinned)),
            None,
        );

        let key = detach_object(&mut world, entity, true).expect("was attached");

        assert!(object_of(&world, entity).is_none());
        assert!(!world.entity(entity).contains::<tags::Mesh>());
        assert!(!world.entity(entity).contains::<tags::SkinnedMesh>());
        assert!(world.resource::<NodeEntityMap>().is_empty());

        // Orphan stays in the arena, out of the tree.
        let graph = &world.resource::<SceneGraphRes>().0;
        assert!(graph.contains(key));
        assert!(graph.parent(key).is_none());
        assert!(graph.children(graph.root()).is_empty());
    }

    #[test]
    fn test_detach_without_node_is_a_noop() {
        let mut world = test_world();
        let entity = world.spawn_empty().id();
        assert_eq!(detach_object(&mut world, entity, true), None);
    }

    #[test]
    fn test_detach_without_unparent_keeps_nested_node_in_place() {
        let mut world = test_world();
        let parent = world.spawn_empty().id();
        let child = world.spawn_empty().id();
        attach_object(&mut world, parent, NodePrefab::from_kind(NodeKind::Group), None);
        attach_object(
            &mut world,
            child,
            NodePrefab::from_kind(NodeKind::Sprite),
            Some(parent),
        );

        let parent_key = object_of(&world, parent).unwrap();
        let child_key = detach_object(&mut world, child, false).unwrap();

        // Not a direct child of the root, so the topology is untouched.
        let graph = &world.resource::<SceneGraphRes>().0;
        assert_eq!(graph.parent(child_key), Some(parent_key));
        // But the entity association is gone all the same.
        assert!(object_of(&world, child).is_none());
    }

    #[test]
    fn test_detach_without_unparent_removes_direct_root_child() {
        let mut world = test_world();
        let entity = world.spawn_empty().id();
        attach_object(
            &mut world,
            entity,
            NodePrefab::from_kind(NodeKind::Mesh(MeshKind::Standard)),
            None,
        );

        let key = detach_object(&mut world, entity, false).unwrap();
        let graph = &world.resource::<SceneGraphRes>().0;
        assert!(graph.parent(key).is_none());
        assert!(graph.children(graph.root()).is_empty());
    }

    #[test]
    fn test_attach_detach_attach_leaves_single_reference() {
        let mut world = test_world();
        let entity = world.spawn_empty().id();
        attach_object(
            &mut world,
            entity,
            NodePrefab::from_kind(NodeKind::Mesh(MeshKind::Instanced)),
            None,
        );
        detach_object(&mut world, entity, true);
        attach_object(
            &mut world,
            entity,
            NodePrefab::from_kind(NodeKind::Light(crate::scene::node::LightKind::Point)),
            None,
        );

        // Exactly one live association, with only the second node's tags.
        assert!(object_of(&world, entity).is_some());
        assert_eq!(world.resource::<NodeEntityMap>().len(), 1);
        assert!(world.entity(entity).contains::<tags::Light>());
        assert!(world.entity(entity).contains::<tags::PointLight>());
        assert!(!world.entity(entity).contains::<tags::Mesh>());
        assert!(!world.entity(entity).contains::<tags::InstancedMesh>());
    }
}
