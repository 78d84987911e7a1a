use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use std::collections::HashMap;

use crate::components::{ChaseCamera, RunwaySegment, StripKind};
use crate::resources::{ChaseCameraConfig, OceanConfig, RunwayConfig, WaveField};
use crate::utils::to_render;

const SKY: Color = Color::srgb(0.529, 0.808, 0.922);
const FOG_START: f32 = 50.0;
const FOG_END: f32 = 1000.0;

/// Marks the animated ocean plane.
#[derive(Component, Debug)]
pub struct OceanSurface;

/// Meshes and materials shared by every runway segment, one pair per strip kind.
#[derive(Resource, Debug, Default)]
pub struct RunwayAssets {
    strips: HashMap<StripKind, (Handle<Mesh>, Handle<StandardMaterial>)>,
}

impl RunwayAssets {
    fn get(&self, kind: StripKind) -> Option<&(Handle<Mesh>, Handle<StandardMaterial>)> {
        self.strips.get(&kind)
    }
}

/// Sky, lights, ground and ocean.
pub fn setup_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    ocean: Res<OceanConfig>,
) {
    commands.insert_resource(ClearColor(SKY));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 600.0,
    });

    commands.spawn((
        Name::new("sun"),
        DirectionalLight {
            illuminance: light_consts::lux::AMBIENT_DAYLIGHT * 0.8,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 50.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Name::new("ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ocean.ground_size, ocean.ground_size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x3a, 0x5a, 0x3a),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, ocean.ground_elevation, 0.0),
    ));

    commands.spawn((
        Name::new("ocean"),
        OceanSurface,
        Mesh3d(
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(ocean.size, ocean.size)
                    .subdivisions(ocean.subdivisions),
            ),
        ),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x00, 0x69, 0x94),
            perceptual_roughness: 0.8,
            metallic: 0.2,
            ..default()
        })),
        Transform::from_xyz(0.0, ocean.elevation, 0.0),
    ));
}

/// Turns the simulated chase camera into a rendering 3D camera.
pub fn decorate_chase_camera(
    mut commands: Commands,
    query: Query<Entity, (With<ChaseCamera>, Without<Camera3d>)>,
    config: Res<ChaseCameraConfig>,
) {
    for entity in &query {
        commands.entity(entity).insert((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: config.fov.to_radians(),
                near: config.znear,
                far: config.zfar,
                ..default()
            }),
            DistanceFog {
                color: SKY,
                falloff: FogFalloff::Linear {
                    start: FOG_START,
                    end: FOG_END,
                },
                ..default()
            },
        ));
    }
}

pub fn setup_runway_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<RunwayConfig>,
) {
    let length = config.segment_length as f32;
    let white = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        ..default()
    });

    let mut strips = HashMap::new();
    strips.insert(
        StripKind::Surface,
        (
            meshes.add(Plane3d::default().mesh().size(config.width as f32, length)),
            materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0x2a, 0x2a, 0x2a),
                perceptual_roughness: 0.7,
                metallic: 0.1,
                ..default()
            }),
        ),
    );
    strips.insert(
        StripKind::CenterLine,
        (
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(config.center_line_width as f32, length),
            ),
            materials.add(StandardMaterial {
                base_color: Color::srgb(1.0, 1.0, 0.0),
                emissive: LinearRgba::rgb(1.0, 1.0, 0.0) * 0.3,
                ..default()
            }),
        ),
    );
    strips.insert(
        StripKind::EdgeLine,
        (
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(config.edge_line_width as f32, length),
            ),
            white.clone(),
        ),
    );
    strips.insert(
        StripKind::Dash,
        (
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(config.dash_width as f32, config.dash_length as f32),
            ),
            white,
        ),
    );

    commands.insert_resource(RunwayAssets { strips });
}

/// Gives newly streamed segments their visible strips.
pub fn attach_segment_meshes(
    mut commands: Commands,
    assets: Option<Res<RunwayAssets>>,
    query: Query<(Entity, &RunwaySegment, &Transform), Added<RunwaySegment>>,
) {
    let Some(assets) = assets else {
        return;
    };
    for (entity, segment, transform) in &query {
        commands.entity(entity).with_children(|parent| {
            for strip in &segment.strips {
                let Some((mesh, material)) = assets.get(strip.kind) else {
                    continue;
                };
                let local = to_render(&strip.center) - transform.translation;
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(local),
                ));
            }
        });
    }
}

/// Displaces the ocean vertices to the current wave heights.
pub fn ocean_surface_system(
    waves: Res<WaveField>,
    ocean: Query<&Mesh3d, With<OceanSurface>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Ok(handle) = ocean.get_single() else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&handle.0) else {
        return;
    };
    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        for position in positions.iter_mut() {
            position[1] = waves.height(position[0] as f64, position[2] as f64) as f32;
        }
    }
}
