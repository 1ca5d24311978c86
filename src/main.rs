use bevy_ecs::prelude::*;
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;

use scenelink::resources::insert_scene_resources;
use scenelink::resources::scenegraph::SceneGraphRes;
use scenelink::scene::graph::{NodeKey, SceneGraph};
use scenelink::scene::node::{CameraProjection, LightKind, MeshKind, NodeKind};
use scenelink::scene::prefab::NodePrefab;
use scenelink::systems::attach::attach_object;
use scenelink::systems::removal::{RemovalMode, flush_pending_removals, remove_entity_tree};

/// Scenelink demo
#[derive(Parser)]
#[command(version, about = "Assembles a small entity/scene-graph rig and tears it down again.")]
struct Cli {
    /// Print the scene tree before the teardown.
    #[arg(long)]
    dump: bool,

    /// Load an extra node prefab from a JSON file and attach it to the rig.
    #[arg(long, value_name = "PATH")]
    prefab: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut world = World::new();
    insert_scene_resources(&mut world);

    let mut update = Schedule::default();
    update.add_systems(flush_pending_removals);

    // A small rig: a group holding a camera, a point light, and two meshes,
    // one of them lightmapped.
    let rig = world.spawn_empty().id();
    attach_object(
        &mut world,
        rig,
        NodePrefab::from_kind(NodeKind::Group).with_prop("name", json!("rig")),
        None,
    );
    let camera = world.spawn_empty().id();
    attach_object(
        &mut world,
        camera,
        NodePrefab::from_kind(NodeKind::Camera {
            projection: CameraProjection::Perspective,
            variant: None,
        })
        .with_prop("position", json!([0.0, 1.6, 4.0])),
        Some(rig),
    );
    let lamp = world.spawn_empty().id();
    attach_object(
        &mut world,
        lamp,
        NodePrefab::from_kind(NodeKind::Light(LightKind::Point))
            .with_prop("color", json!("#ffaa00"))
            .with_prop("intensity", json!(2.0))
            .with_prop("position.y", json!(3.0)),
        Some(rig),
    );
    let floor = world.spawn_empty().id();
    attach_object(
        &mut world,
        floor,
        NodePrefab::from_kind(NodeKind::Mesh(MeshKind::Standard))
            .with_prop("name", json!("floor"))
            .with_prop("material.lightmapped", json!(true)),
        Some(rig),
    );
    let crate_box = world.spawn_empty().id();
    attach_object(
        &mut world,
        crate_box,
        NodePrefab::from_kind(NodeKind::Mesh(MeshKind::Standard))
            .with_prop("name", json!("crate"))
            .with_prop("material.color", json!(0x8b4513))
            .with_prop("position", json!([1.0, 0.5, 0.0])),
        Some(rig),
    );

    if let Some(path) = &cli.prefab {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<NodePrefab>(&text) {
                Ok(prefab) => {
                    let extra = world.spawn_empty().id();
                    attach_object(&mut world, extra, prefab, Some(rig));
                    log::info!("attached extra prefab from {}", path.display());
                }
                Err(e) => log::error!("failed to parse prefab {}: {e}", path.display()),
            },
            Err(e) => log::error!("failed to read prefab {}: {e}", path.display()),
        }
    }

    let assembled_nodes = world.resource::<SceneGraphRes>().0.len();
    log::info!(
        "scene assembled: {} nodes, {} entities",
        assembled_nodes,
        live_entities(&mut world)
    );

    if cli.dump {
        let graph = &world.resource::<SceneGraphRes>().0;
        dump_tree(graph, graph.root(), 0);
    }

    // Tear the whole rig down at the next boundary, as a frame would.
    remove_entity_tree(&mut world, rig, RemovalMode::Deferred);
    update.run(&mut world);

    let remaining_nodes = world.resource::<SceneGraphRes>().0.len();
    log::info!(
        "after teardown: {} nodes, {} entities",
        remaining_nodes,
        live_entities(&mut world)
    );
}

fn live_entities(world: &mut World) -> usize {
    let mut query = world.query::<Entity>();
    query.iter(world).count()
}

fn dump_tree(graph: &SceneGraph, key: NodeKey, depth: usize) {
    if let Some(node) = graph.get(key) {
        println!("{}{} [{}]", "  ".repeat(depth), node.name, node.kind.label());
        for child in graph.children(key) {
            dump_tree(graph, *child, depth + 1);
        }
    }
}
