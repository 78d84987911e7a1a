use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::components::{CraftVisual, ModelCandidates, PendingModel};
use crate::resources::CraftModelConfig;

const FALLBACK_COLOR: Color = Color::srgb(0.0, 1.0, 1.0);

/// Drives the model load of every pending craft through its candidate paths.
///
/// Each frame a pending craft either starts loading its current candidate,
/// keeps waiting, attaches the loaded scene, or moves on after a failure. Once
/// the candidates run out the craft falls back to primitive geometry.
pub fn craft_model_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    config: Res<CraftModelConfig>,
    mut query: Query<(
        Entity,
        &mut CraftVisual,
        &mut ModelCandidates,
        Option<&PendingModel>,
    )>,
) {
    for (entity, mut visual, mut candidates, pending) in &mut query {
        if visual.is_resolved() {
            continue;
        }

        let Some(PendingModel(handle)) = pending else {
            match candidates.current() {
                Some(path) => {
                    info!("Loading craft model from {}", path);
                    let handle: Handle<Gltf> = asset_server.load(path.to_string());
                    commands.entity(entity).insert(PendingModel(handle));
                }
                None => {
                    warn!("No craft model could be loaded, using fallback geometry");
                    *visual = CraftVisual::Fallback;
                }
            }
            continue;
        };

        let failure = match asset_server.get_load_state(handle.id()) {
            Some(LoadState::Loaded) => {
                let scene = gltfs.get(handle).and_then(|gltf| {
                    gltf.default_scene
                        .clone()
                        .or_else(|| gltf.scenes.first().cloned())
                });
                match scene {
                    Some(scene) => {
                        commands
                            .entity(entity)
                            .remove::<PendingModel>()
                            .with_children(|parent| {
                                parent.spawn((
                                    Name::new("craft model"),
                                    SceneRoot(scene),
                                    Transform::from_rotation(Quat::from_rotation_y(
                                        config.yaw_offset,
                                    ))
                                    .with_scale(Vec3::splat(config.scale)),
                                ));
                            });
                        *visual = CraftVisual::Model;
                        info!("Craft model loaded");
                        None
                    }
                    None => Some("file contains no scene".to_string()),
                }
            }
            Some(LoadState::Failed(error)) => Some(error.to_string()),
            _ => None,
        };

        if let Some(reason) = failure {
            warn!(
                "Craft model {} failed: {}",
                candidates.current().unwrap_or("<none>"),
                reason
            );
            commands.entity(entity).remove::<PendingModel>();
            if candidates.advance_after_failure().is_none() {
                warn!("No craft model could be loaded, using fallback geometry");
                *visual = CraftVisual::Fallback;
            }
        }
    }
}

/// Builds the primitive craft body: cone fuselage, wing and tail.
pub fn attach_fallback_geometry(
    mut commands: Commands,
    query: Query<(Entity, &CraftVisual), Changed<CraftVisual>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, visual) in &query {
        if *visual != CraftVisual::Fallback {
            continue;
        }

        let material = materials.add(StandardMaterial {
            base_color: FALLBACK_COLOR,
            ..default()
        });
        let fuselage = meshes.add(Cone {
            radius: 0.2,
            height: 2.0,
        });
        let wing = meshes.add(Cuboid::new(3.0, 0.1, 0.5));
        let tail = meshes.add(Cuboid::new(0.1, 1.0, 0.5));

        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                Name::new("fuselage"),
                Mesh3d(fuselage),
                MeshMaterial3d(material.clone()),
                Transform::from_rotation(Quat::from_rotation_z(FRAC_PI_2)),
            ));
            parent.spawn((
                Name::new("wing"),
                Mesh3d(wing),
                MeshMaterial3d(material.clone()),
                Transform::IDENTITY,
            ));
            parent.spawn((
                Name::new("tail"),
                Mesh3d(tail),
                MeshMaterial3d(material),
                Transform::from_xyz(-0.8, 0.3, 0.0),
            ));
        });
    }
}
