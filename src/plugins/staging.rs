use bevy::prelude::*;

use crate::resources::frame_ticked;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    SpawnCraft,
    SpawnCamera,
    BuildScenery,
}

/// Per-frame pipeline, in execution order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FrameSet {
    Tick,
    Input,
    Physics,
    World,
    Camera,
    Render,
    Telemetry,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::SpawnCraft,
                StartupStage::SpawnCamera,
                StartupStage::BuildScenery,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (
                FrameSet::Tick,
                (
                    FrameSet::Input,
                    FrameSet::Physics,
                    FrameSet::World,
                    FrameSet::Camera,
                    FrameSet::Render,
                    FrameSet::Telemetry,
                )
                    .chain()
                    .run_if(frame_ticked),
            )
                .chain(),
        );
    }
}
