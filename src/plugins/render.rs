use bevy::prelude::*;

use crate::plugins::{FrameSet, StartupStage};
use crate::systems::{
    attach_fallback_geometry, attach_segment_meshes, craft_model_system, decorate_chase_camera,
    ocean_surface_system, setup_environment, setup_runway_assets,
};

/// Visuals for the flight core: sky, lights, ground, ocean, runway meshes,
/// the craft model and the 3D camera. Requires the default render plugins.
pub struct FlightRenderPlugin;

impl Plugin for FlightRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                setup_environment,
                setup_runway_assets,
                decorate_chase_camera,
            )
                .in_set(StartupStage::BuildScenery),
        )
        .add_systems(
            Update,
            (
                (craft_model_system, attach_fallback_geometry)
                    .chain()
                    .before(FrameSet::Tick),
                (attach_segment_meshes, ocean_surface_system).in_set(FrameSet::Render),
            ),
        );
    }
}
