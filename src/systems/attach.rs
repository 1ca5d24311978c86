//! Node attachment.
//!
//! [`attach_object`] gives an entity ownership of a freshly built scene
//! node subtree: it instantiates the prefab, applies its property map,
//! configures the shadow flags of renderable descendants, links the
//! subtree under the parent entity's node (or the scene root), and mirrors
//! the node subtype onto the entity as tag components.

use bevy_ecs::prelude::{Entity, World};
use log::debug;

use crate::components::scenenode::SceneNodeRef;
use crate::components::tags::insert_tags;
use crate::resources::nodemap::NodeEntityMap;
use crate::resources::scenegraph::SceneGraphRes;
use crate::scene::graph::{NodeKey, SceneGraph};
use crate::scene::prefab::NodePrefab;
use crate::scene::props::apply_properties;

/// Build the prefab's node subtree, hook it into the scene, and hand
/// ownership to `entity`.
///
/// The subtree goes under `parent`'s node when a parent entity is given
/// and currently owns one, under the scene root otherwise. The entity
/// receives a [`SceneNodeRef`] plus the tag components derived from the
/// node's subtype. If the entity already owned a node, that node is
/// detached first so the one-node-per-entity invariant holds.
pub fn attach_object(
    world: &mut World,
    entity: Entity,
    prefab: NodePrefab,
    parent: Option<Entity>,
) -> Entity {
    if world.get::<SceneNodeRef>(entity).is_some() {
        debug!("entity {entity:?} already owns a node; detaching it first");
        crate::systems::detach::detach_object(world, entity, true);
    }

    let parent_key = parent.and_then(|p| world.get::<SceneNodeRef>(p).map(|r| r.key()));

    let (key, kind) = {
        let mut graph_res = world.resource_mut::<SceneGraphRes>();
        let graph = &mut graph_res.0;
        let key = build_subtree(graph, prefab);
        configure_shadows(graph, key);
        graph.link(key, parent_key.unwrap_or(graph.root()));
        let kind = graph.get(key).map(|n| n.kind).unwrap_or_default();
        (key, kind)
    };

    world.entity_mut(entity).insert(SceneNodeRef::new(key));
    insert_tags(&mut world.entity_mut(entity), &kind);
    world.resource_mut::<NodeEntityMap>().insert(key, entity);

    debug!("attached {} node to entity {entity:?}", kind.label());
    entity
}

/// Instantiate a prefab subtree into the graph; returns the subtree root.
fn build_subtree(graph: &mut SceneGraph, prefab: NodePrefab) -> NodeKey {
    let NodePrefab {
        source,
        props,
        children,
    } = prefab;
    let mut node = NodePrefab::build_node(source);
    apply_properties(&mut node, &props);
    let key = graph.insert(node);
    for child in children {
        let child_key = build_subtree(graph, child);
        graph.link(child_key, key);
    }
    key
}

/// Walk a subtree and set the shadow flags of renderable geometry: always
/// cast, and receive unless the material's lighting is baked into a
/// lightmap (a lightmapped surface must not be shadowed twice).
pub(crate) fn configure_shadows(graph: &mut SceneGraph, start: NodeKey) {
    for key in graph.walk(start) {
        let Some(node) = graph.get_mut(key) else {
            continue;
        };
        if node.kind.is_renderable_geometry() {
            node.cast_shadow = true;
            node.receive_shadow = !node.material.as_ref().is_some_and(|m| m.lightmapped);
        }
    }
}
