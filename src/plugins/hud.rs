use bevy::prelude::*;

use crate::plugins::{FrameSet, StartupStage};
use crate::resources::{ChannelSink, TelemetrySinks};
use crate::systems::{hud_command_system, spawn_hud, HudReceiver};

/// On-screen speed, altitude and boost readout.
///
/// The HUD is an ordinary telemetry sink: the plugin attaches a channel sink
/// to the simulation and draws whatever arrives on the other end.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        let (sink, receiver) = ChannelSink::pair();

        app.init_resource::<TelemetrySinks>()
            .insert_resource(HudReceiver(receiver));
        app.world_mut()
            .resource_mut::<TelemetrySinks>()
            .attach(sink);

        app.add_systems(Startup, spawn_hud.in_set(StartupStage::BuildScenery))
            .add_systems(
                Update,
                hud_command_system.after(FrameSet::Telemetry),
            );
    }
}
