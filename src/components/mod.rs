//! ECS components for scene-linked entities.
//!
//! Submodules overview:
//! - [`scenenode`] – owning reference from an entity to its scene-graph node
//! - [`tags`] – zero-data subtype markers mirroring the node's runtime kind

pub mod scenenode;
pub mod tags;
