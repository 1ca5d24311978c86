//! ECS resources owned by the synchronizer.
//!
//! Overview
//! - `nodemap` – weak node-key → entity side table for teardown routing
//! - `pending` – queue of entities whose cascading removal was deferred
//! - `scenegraph` – resource wrapper owning the scene graph

use bevy_ecs::prelude::World;

pub mod nodemap;
pub mod pending;
pub mod scenegraph;

/// Insert every resource the synchronization operations rely on.
///
/// Call once on a fresh world, before the first attach.
pub fn insert_scene_resources(world: &mut World) {
    world.insert_resource(scenegraph::SceneGraphRes::default());
    world.insert_resource(nodemap::NodeEntityMap::default());
    world.insert_resource(pending::PendingRemovals::default());
}
