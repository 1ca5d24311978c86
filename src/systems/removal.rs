//! Cascading entity removal.
//!
//! Removing an entity that owns a scene node must also remove every entity
//! whose node lives inside that subtree, then delete the subtree itself.
//! [`remove_entity_tree`] performs the cascade immediately or parks the
//! entity in [`PendingRemovals`] for [`flush_pending_removals`] to process
//! at the next scheduling boundary.
//!
//! After a cascade, no scene node references a despawned entity and no
//! entity references a deleted node.

use bevy_ecs::prelude::{Entity, World};
use log::debug;

use crate::components::scenenode::SceneNodeRef;
use crate::resources::nodemap::NodeEntityMap;
use crate::resources::pending::PendingRemovals;
use crate::resources::scenegraph::SceneGraphRes;

/// Whether a cascade runs within the current update or at the next
/// scheduling boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalMode {
    Immediate,
    Deferred,
}

/// Remove `entity`, every entity back-referenced from its node subtree,
/// and the subtree itself.
///
/// `Deferred` queues the whole cascade for the next
/// [`flush_pending_removals`] run instead of performing it now.
pub fn remove_entity_tree(world: &mut World, entity: Entity, mode: RemovalMode) {
    match mode {
        RemovalMode::Deferred => {
            world.resource_mut::<PendingRemovals>().push(entity);
            debug!("queued entity {entity:?} for removal at the next boundary");
        }
        RemovalMode::Immediate => remove_now(world, entity),
    }
}

fn remove_now(world: &mut World, entity: Entity) {
    if let Some(key) = world.get::<SceneNodeRef>(entity).map(|r| r.key()) {
        // Every back-referenced entity below this node goes first. The
        // side-table entry is taken before recursing, so a node visited
        // again through a nested cascade is skipped.
        let subtree = world.resource::<SceneGraphRes>().0.walk(key);
        for node_key in subtree.into_iter().skip(1) {
            if let Some(owner) = world.resource_mut::<NodeEntityMap>().take(node_key) {
                if owner != entity {
                    remove_now(world, owner);
                }
            }
        }
        world.resource_mut::<NodeEntityMap>().take(key);
        world.resource_mut::<SceneGraphRes>().0.remove_subtree(key);
    }
    if let Ok(e) = world.get_entity_mut(entity) {
        e.despawn();
    }
}

/// Exclusive system draining the deferred-removal queue. Add it to the
/// per-frame schedule; it is a no-op on ticks with nothing queued.
pub fn flush_pending_removals(world: &mut World) {
    let pending = world.resource_mut::<PendingRemovals>().drain();
    if pending.is_empty() {
        return;
    }
    debug!("flushing {} pending removal(s)", pending.len());
    for entity in pending {
        remove_now(world, entity);
    }
}
