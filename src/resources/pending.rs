//! Deferred-removal queue.
//!
//! Cascading entity removal can be requested in deferred mode, in which
//! case the entity is parked here and the cascade runs at the next
//! scheduling boundary via
//! [`flush_pending_removals`](crate::systems::removal::flush_pending_removals).

use bevy_ecs::prelude::{Entity, Resource};

/// Entities whose cascading removal was deferred to the next boundary.
#[derive(Resource, Debug, Default)]
pub struct PendingRemovals {
    queue: Vec<Entity>,
}

impl PendingRemovals {
    pub fn push(&mut self, entity: Entity) {
        self.queue.push(entity);
    }

    /// Take the queued entities, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.queue)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
