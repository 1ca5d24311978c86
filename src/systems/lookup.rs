//! Node lookup accessors.

use bevy_ecs::prelude::{Entity, World};

use crate::components::scenenode::SceneNodeRef;
use crate::resources::scenegraph::SceneGraphRes;
use crate::scene::graph::NodeKey;
use crate::scene::node::Node;

/// Key of the node owned by `entity`, or `None` when the entity holds no
/// node reference. No side effects.
pub fn object_of(world: &World, entity: Entity) -> Option<NodeKey> {
    world.get::<SceneNodeRef>(entity).map(|r| r.key())
}

/// The node owned by `entity`, resolved through the scene graph.
pub fn scene_node(world: &World, entity: Entity) -> Option<&Node> {
    let key = object_of(world, entity)?;
    world.get_resource::<SceneGraphRes>()?.0.get(key)
}
