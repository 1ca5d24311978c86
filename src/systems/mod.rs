//! Synchronization operations.
//!
//! The operations are imperative `&mut World` entry points invoked by
//! behavior code, plus one schedulable system for the deferred-removal
//! boundary.
//!
//! Submodules overview
//! - [`attach`] – build a node subtree for an entity and hook it into the scene
//! - [`detach`] – sever an entity/node association, clearing tags and back-refs
//! - [`lookup`] – resolve an entity's node, if any
//! - [`removal`] – cascading teardown of an entity and its node subtree

pub mod attach;
pub mod detach;
pub mod lookup;
pub mod removal;
