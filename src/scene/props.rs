//! Lenient dotted-path property application for scene nodes.
//!
//! Property maps address node fields by dot-separated paths such as
//! `material.color` or `position.x`. Application is best-effort by policy:
//! a path segment that does not name anything is skipped silently, and only
//! a missing intermediate object (a `material.*` path on a node without a
//! material) is worth a warning. Color-typed targets accept packed-integer
//! and string values and route them through [`Color`]'s constructors so a
//! raw scalar never ends up in a color field.

use log::warn;
use serde_json::{Map, Value};

use crate::scene::color::Color;
use crate::scene::node::{Material, Node, Vec3};

/// Apply every entry of a property map to `node`. Entries are independent;
/// one unresolvable path does not affect the others.
pub fn apply_properties(node: &mut Node, props: &Map<String, Value>) {
    for (path, value) in props {
        apply_property(node, path, value);
    }
}

/// Apply a single dotted-path property to `node`.
///
/// Unknown segments and type mismatches are skipped without error. The one
/// warned case is a path into a missing sub-object.
pub fn apply_property(node: &mut Node, path: &str, value: &Value) {
    let mut segments = path.split('.');
    let head = segments.next().unwrap_or_default();
    let rest: Vec<&str> = segments.collect();

    match (head, rest.as_slice()) {
        ("name", []) => {
            if let Some(s) = value.as_str() {
                node.name = s.to_owned();
            }
        }
        ("visible", []) => {
            if let Some(b) = value.as_bool() {
                node.visible = b;
            }
        }
        ("cast_shadow", []) => {
            if let Some(b) = value.as_bool() {
                node.cast_shadow = b;
            }
        }
        ("receive_shadow", []) => {
            if let Some(b) = value.as_bool() {
                node.receive_shadow = b;
            }
        }
        ("intensity", []) => {
            if let Some(v) = value.as_f64() {
                node.intensity = v as f32;
            }
        }
        ("color", []) => {
            if let Some(c) = Color::coerce(value) {
                node.color = Some(c);
            }
        }
        ("position", rest) => apply_vec3(&mut node.position, rest, value),
        ("rotation", rest) => apply_vec3(&mut node.rotation, rest, value),
        ("scale", rest) => apply_vec3(&mut node.scale, rest, value),
        ("material", rest @ [_, ..]) => match node.material.as_mut() {
            Some(material) => apply_material(material, rest, value),
            None => warn!(
                "property path {path:?} targets the missing material of node {:?}; skipped",
                node.name
            ),
        },
        _ => {}
    }
}

fn apply_vec3(target: &mut Vec3, rest: &[&str], value: &Value) {
    match rest {
        [] => {
            // Whole-vector assignment from [x, y, z] or {x, y, z}.
            let read = |v: Option<&Value>| v.and_then(Value::as_f64).map(|f| f as f32);
            let components = match value {
                Value::Array(items) => (
                    read(items.first()),
                    read(items.get(1)),
                    read(items.get(2)),
                ),
                Value::Object(map) => (read(map.get("x")), read(map.get("y")), read(map.get("z"))),
                _ => (None, None, None),
            };
            if let (Some(x), Some(y), Some(z)) = components {
                *target = Vec3::new(x, y, z);
            }
        }
        [axis] => {
            if let Some(v) = value.as_f64() {
                match *axis {
                    "x" => target.x = v as f32,
                    "y" => target.y = v as f32,
                    "z" => target.z = v as f32,
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

fn apply_material(material: &mut Material, rest: &[&str], value: &Value) {
    match rest {
        ["color"] => {
            if let Some(c) = Color::coerce(value) {
                material.color = c;
            }
        }
        ["emissive"] => {
            if let Some(c) = Color::coerce(value) {
                material.emissive = c;
            }
        }
        ["opacity"] => {
            if let Some(v) = value.as_f64() {
                material.opacity = v as f32;
            }
        }
        ["lightmapped"] => {
            if let Some(b) = value.as_bool() {
                material.lightmapped = b;
            }
        }
        _ => {}
    }
}
