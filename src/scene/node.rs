//! Scene node data and the node subtype enumeration.
//!
//! A [`Node`] is one element of the scene tree: a name, a [`NodeKind`]
//! describing its runtime subtype, transform fields, visibility and shadow
//! flags, and an optional [`Material`]. The subtype is decided once, when
//! the node is created, and drives both tag derivation on the ECS side and
//! the shadow policy applied at attachment.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::scene::color::Color;
use crate::scene::graph::NodeKey;

/// Simple 3-component vector for node transforms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Camera projection model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraProjection {
    Orthographic,
    Perspective,
}

/// Special camera flavors on top of the projection model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraVariant {
    Array,
    Cube,
    ImmediateRender,
}

/// Light source flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightKind {
    Ambient,
    Directional,
    Hemisphere,
    Point,
    RectArea,
    Spot,
}

/// Light probe flavor, when the probe is more specific than the base type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightProbeKind {
    Ambient,
    Hemisphere,
}

/// Mesh flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshKind {
    Standard,
    Instanced,
    Skinned,
}

/// Line topology, when more specific than a plain line strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineVariant {
    Loop,
    Segments,
}

/// Runtime subtype of a scene node, decided once at construction.
///
/// `Plain` is a bare transform node with no subtype facts; it receives no
/// tag components when attached to an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Plain,
    Group,
    Bone,
    Lod,
    Points,
    Sprite,
    SceneRoot,
    Skybox,
    AudioListener,
    Audio { positional: bool },
    Camera {
        projection: CameraProjection,
        variant: Option<CameraVariant>,
    },
    Light(LightKind),
    LightProbe(Option<LightProbeKind>),
    Mesh(MeshKind),
    Line(Option<LineVariant>),
}

impl NodeKind {
    /// Whether the node is renderable geometry for shadow purposes.
    pub fn is_renderable_geometry(&self) -> bool {
        matches!(self, NodeKind::Mesh(_))
    }

    /// Whether nodes of this kind carry a material by default.
    pub fn has_material(&self) -> bool {
        matches!(
            self,
            NodeKind::Mesh(_) | NodeKind::Sprite | NodeKind::Line(_) | NodeKind::Points
        )
    }

    /// Short lowercase label for logging and tree dumps.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Plain => "node",
            NodeKind::Group => "group",
            NodeKind::Bone => "bone",
            NodeKind::Lod => "lod",
            NodeKind::Points => "points",
            NodeKind::Sprite => "sprite",
            NodeKind::SceneRoot => "scene",
            NodeKind::Skybox => "skybox",
            NodeKind::AudioListener => "audio-listener",
            NodeKind::Audio { positional: true } => "positional-audio",
            NodeKind::Audio { positional: false } => "audio",
            NodeKind::Camera { .. } => "camera",
            NodeKind::Light(_) => "light",
            NodeKind::LightProbe(_) => "light-probe",
            NodeKind::Mesh(_) => "mesh",
            NodeKind::Line(_) => "line",
        }
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Plain
    }
}

/// Surface description for renderable nodes.
///
/// `lightmapped` marks a material whose lighting is precomputed and baked
/// into a texture; such surfaces must not also receive dynamic shadows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub opacity: f32,
    pub lightmapped: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            emissive: Color::BLACK,
            opacity: 1.0,
            lightmapped: false,
        }
    }
}

/// One node of the scene tree.
///
/// Tree links (`parent`/`children`) are owned by the
/// [`SceneGraph`](crate::scene::graph::SceneGraph) and only readable from
/// outside the graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub visible: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    /// Light intensity; meaningful for light nodes only.
    pub intensity: f32,
    /// Tint for lights and sprites.
    pub color: Option<Color>,
    pub material: Option<Material>,
    #[serde(skip)]
    pub(crate) parent: Option<NodeKey>,
    #[serde(skip)]
    pub(crate) children: SmallVec<[NodeKey; 8]>,
}

impl Node {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            visible: true,
            cast_shadow: false,
            receive_shadow: false,
            intensity: 1.0,
            color: None,
            material: kind.has_material().then(Material::default),
            parent: None,
            children: SmallVec::new(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Key of the parent node, if linked into a tree.
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Keys of the direct children.
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_defaults() {
        let n = Node::new(NodeKind::Group, "rig");
        assert_eq!(n.name, "rig");
        assert!(n.visible);
        assert!(!n.cast_shadow);
        assert_eq!(n.scale, Vec3::ONE);
        assert!(n.material.is_none());
        assert!(n.parent().is_none());
        assert!(n.children().is_empty());
    }

    #[test]
    fn test_mesh_gets_default_material() {
        let n = Node::new(NodeKind::Mesh(MeshKind::Standard), "box");
        let mat = n.material.expect("meshes carry a material");
        assert_eq!(mat.color, Color::WHITE);
        assert!(!mat.lightmapped);
    }

    #[test]
    fn test_renderable_geometry_is_mesh_only() {
        assert!(NodeKind::Mesh(MeshKind::Skinned).is_renderable_geometry());
        assert!(!NodeKind::Line(None).is_renderable_geometry());
        assert!(!NodeKind::Sprite.is_renderable_geometry());
        assert!(!NodeKind::Group.is_renderable_geometry());
    }
}
