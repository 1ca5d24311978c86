//! Scenelink library.
//!
//! Keeps an ECS world and a 3D scene graph in lockstep: entities own scene
//! nodes through a reference component, node subtypes are mirrored onto
//! entities as queryable tag components, and destroying an entity tears
//! down its node subtree together with every entity attached inside it.
//!
//! This module exposes the components, resources, scene data model, and
//! synchronization operations for use in integration tests and as a
//! reusable library.

pub mod components;
pub mod resources;
pub mod scene;
pub mod systems;
