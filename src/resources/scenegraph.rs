//! Scene graph resource.
//!
//! The graph lives in the ECS world as a plain resource, which gives it an
//! explicit lifecycle: created with the world, dropped with the world, no
//! ambient global in between.

use bevy_ecs::prelude::Resource;

use crate::scene::graph::SceneGraph;

/// Resource wrapper owning the scene graph.
#[derive(Resource, Debug, Default)]
pub struct SceneGraphRes(pub SceneGraph);
