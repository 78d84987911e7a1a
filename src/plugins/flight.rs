use bevy::prelude::*;

use crate::components::{
    ChaseCamera, ControlAxes, CraftBody, CraftVisual, ModelCandidates, PlayerController,
};
use crate::plugins::{FrameSet, StartupSequencePlugin, StartupStage};
use crate::resources::{
    ChaseCameraConfig, CraftModelConfig, FlightConfig, FlightTelemetry, FrameControl, FrameDelta,
    FrameScheduler, LogSink, RunwayWindow, SchedulerConfig, SimulationConfig, TelemetrySinks,
    WaveField,
};
use crate::systems::{
    autostart_scheduler, camera_transform_system, chase_camera_system, craft_transform_system,
    dispose_telemetry_on_exit, flight_physics_system, frame_tick_system, keyboard_input_system,
    pause_toggle_system, publish_telemetry_system, runway_window_system, wave_clock_system,
};
use crate::utils::to_render;

/// The simulation core: craft, controls, flight model, runway window, chase
/// camera and telemetry. Runs without a renderer.
pub struct FlightPlugin {
    config: SimulationConfig,
}

impl FlightPlugin {
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    fn spawn_craft(
        mut commands: Commands,
        flight: Res<FlightConfig>,
        model: Res<CraftModelConfig>,
        asset_server: Option<Res<AssetServer>>,
        mut telemetry: ResMut<FlightTelemetry>,
    ) {
        let body = CraftBody::at_position(flight.start_position);
        let visual = if model.enabled && asset_server.is_some() {
            CraftVisual::Pending
        } else {
            CraftVisual::Fallback
        };

        telemetry.altitude = body.position.y;

        commands.spawn((
            Name::new("craft"),
            body,
            ControlAxes::default(),
            PlayerController,
            visual,
            ModelCandidates::new(model.candidates.clone()),
            Transform::from_translation(to_render(&body.position)),
            Visibility::default(),
        ));
        info!(
            "Craft spawned at {:?} with visual {:?}",
            body.position, visual
        );
    }

    fn spawn_camera(mut commands: Commands, config: Res<ChaseCameraConfig>) {
        let camera = ChaseCamera::from_config(&config);
        let eye = to_render(&camera.current_position);
        let aim = to_render(&camera.current_look_at);
        commands.spawn((
            Name::new("chase camera"),
            camera,
            Transform::from_translation(eye).looking_at(aim, Vec3::Y),
        ));
    }
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        app.add_plugins(StartupSequencePlugin)
            .add_event::<FrameControl>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<TelemetrySinks>()
            .insert_resource(FrameScheduler::new(config.scheduler.max_delta()))
            .insert_resource(FrameDelta::default())
            .insert_resource(FlightTelemetry::default())
            .insert_resource(RunwayWindow::from_config(&config.runway))
            .insert_resource(WaveField::from_config(&config.ocean))
            .insert_resource(config.flight)
            .insert_resource(config.controls)
            .insert_resource(config.camera)
            .insert_resource(config.runway)
            .insert_resource(config.ocean)
            .insert_resource(config.scheduler)
            .insert_resource(config.model);

        app.world_mut()
            .resource_mut::<TelemetrySinks>()
            .attach(LogSink::default());

        app.add_systems(
            Startup,
            (
                Self::spawn_craft.in_set(StartupStage::SpawnCraft),
                Self::spawn_camera.in_set(StartupStage::SpawnCamera),
                runway_window_system.in_set(StartupStage::BuildScenery),
                autostart_scheduler,
            ),
        )
        .add_systems(
            Update,
            (
                (pause_toggle_system, frame_tick_system)
                    .chain()
                    .in_set(FrameSet::Tick),
                keyboard_input_system.in_set(FrameSet::Input),
                flight_physics_system.in_set(FrameSet::Physics),
                (runway_window_system, wave_clock_system).in_set(FrameSet::World),
                chase_camera_system.in_set(FrameSet::Camera),
                (craft_transform_system, camera_transform_system).in_set(FrameSet::Render),
                publish_telemetry_system.in_set(FrameSet::Telemetry),
            ),
        )
        .add_systems(Last, dispose_telemetry_on_exit);
    }
}
