//! Subtype tag components.
//!
//! One zero-data marker per node subtype fact, so systems can query
//! entities by the kind of scene node they own ("all meshes", "all point
//! lights") without touching the graph. [`insert_tags`] derives the exact
//! tag set from a node's [`NodeKind`]; [`ObjectTags`] is the bundle of
//! every subtype tag, used for wholesale removal on detach (removing an
//! absent bundle member is a no-op, so one `remove` call restores the
//! zero-tag state whatever the previous subtype was).

use bevy_ecs::prelude::{Bundle, Component};
use bevy_ecs::world::EntityWorldMut;

use crate::scene::node::{
    CameraProjection, CameraVariant, LightKind, LightProbeKind, LineVariant, MeshKind, NodeKind,
};

macro_rules! subtype_tags {
    ($($(#[$meta:meta])* $name:ident => $field:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Component, Clone, Copy, Debug, Default)]
            pub struct $name;
        )+

        /// Bundle of every subtype tag, for wholesale removal.
        #[derive(Bundle, Default)]
        pub struct ObjectTags {
            $(pub $field: $name,)+
        }
    };
}

subtype_tags! {
    /// Entity's node is a mesh.
    Mesh => mesh,
    InstancedMesh => instanced_mesh,
    SkinnedMesh => skinned_mesh,
    /// Entity's node is a light source.
    Light => light,
    AmbientLight => ambient_light,
    DirectionalLight => directional_light,
    HemisphereLight => hemisphere_light,
    PointLight => point_light,
    RectAreaLight => rect_area_light,
    SpotLight => spot_light,
    LightProbe => light_probe,
    AmbientLightProbe => ambient_light_probe,
    HemisphereLightProbe => hemisphere_light_probe,
    /// Entity's node is a camera.
    Camera => camera,
    OrthographicCamera => orthographic_camera,
    PerspectiveCamera => perspective_camera,
    ArrayCamera => array_camera,
    CubeCamera => cube_camera,
    ImmediateRenderObject => immediate_render_object,
    Audio => audio,
    PositionalAudio => positional_audio,
    AudioListener => audio_listener,
    Bone => bone,
    Group => group,
    Lod => lod,
    Line => line,
    LineLoop => line_loop,
    LineSegments => line_segments,
    Points => points,
    Sprite => sprite,
    /// Entity's node is the scene root itself.
    Scene => scene,
    Skybox => skybox,
}

/// Insert the tag set describing `kind` onto the entity.
///
/// Light, camera, mesh, light-probe and line subtypes get their base tag
/// plus a more specific one when the kind carries it; positional audio is
/// deliberately tagged without the generic audio tag; a plain node gets
/// nothing.
pub fn insert_tags(entity: &mut EntityWorldMut<'_>, kind: &NodeKind) {
    match *kind {
        NodeKind::Plain => {}
        NodeKind::Group => {
            entity.insert(Group);
        }
        NodeKind::Bone => {
            entity.insert(Bone);
        }
        NodeKind::Lod => {
            entity.insert(Lod);
        }
        NodeKind::Points => {
            entity.insert(Points);
        }
        NodeKind::Sprite => {
            entity.insert(Sprite);
        }
        NodeKind::SceneRoot => {
            entity.insert(Scene);
        }
        NodeKind::Skybox => {
            entity.insert(Skybox);
        }
        NodeKind::AudioListener => {
            entity.insert(AudioListener);
        }
        NodeKind::Audio { positional: true } => {
            entity.insert(PositionalAudio);
        }
        NodeKind::Audio { positional: false } => {
            entity.insert(Audio);
        }
        NodeKind::Camera {
            projection,
            variant,
        } => {
            entity.insert(Camera);
            match projection {
                CameraProjection::Orthographic => {
                    entity.insert(OrthographicCamera);
                }
                CameraProjection::Perspective => {
                    entity.insert(PerspectiveCamera);
                }
            }
            match variant {
                Some(CameraVariant::Array) => {
                    entity.insert(ArrayCamera);
                }
                Some(CameraVariant::Cube) => {
                    entity.insert(CubeCamera);
                }
                Some(CameraVariant::ImmediateRender) => {
                    entity.insert(ImmediateRenderObject);
                }
                None => {}
            }
        }
        NodeKind::Light(light) => {
            entity.insert(Light);
            match light {
                LightKind::Ambient => {
                    entity.insert(AmbientLight);
                }
                LightKind::Directional => {
                    entity.insert(DirectionalLight);
                }
                LightKind::Hemisphere => {
                    entity.insert(HemisphereLight);
                }
                LightKind::Point => {
                    entity.insert(PointLight);
                }
                LightKind::RectArea => {
                    entity.insert(RectAreaLight);
                }
                LightKind::Spot => {
                    entity.insert(SpotLight);
                }
            }
        }
        NodeKind::LightProbe(probe) => {
            entity.insert(LightProbe);
            match probe {
                Some(LightProbeKind::Ambient) => {
                    entity.insert(AmbientLightProbe);
                }
                Some(LightProbeKind::Hemisphere) => {
                    entity.insert(HemisphereLightProbe);
                }
                None => {}
            }
        }
        NodeKind::Mesh(mesh) => {
            entity.insert(Mesh);
            match mesh {
                MeshKind::Standard => {}
                MeshKind::Instanced => {
                    entity.insert(InstancedMesh);
                }
                MeshKind::Skinned => {
                    entity.insert(SkinnedMesh);
                }
            }
        }
        NodeKind::Line(variant) => {
            entity.insert(Line);
            match variant {
                Some(LineVariant::Loop) => {
                    entity.insert(LineLoop);
                }
                Some(LineVariant::Segments) => {
                    entity.insert(LineSegments);
                }
                None => {}
            }
        }
    }
}
