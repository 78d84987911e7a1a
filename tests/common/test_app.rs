use bevy::gltf::GltfPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use skyrunner::{
    components::{ChaseCamera, CraftBody},
    plugins::{FlightPlugin, FrameSet, HudPlugin},
    resources::{FrameControl, FrameDelta, FrameScheduler, SimulationConfig},
    systems::{attach_fallback_geometry, craft_model_system, HudField, HudRoot},
};
use std::time::Duration;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
    frame_time: Duration,
    with_hud: bool,
    with_model_assets: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            frame_time: Duration::from_millis(16),
            with_hud: false,
            with_model_assets: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_frame_time(mut self, frame_time: Duration) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn without_autostart(mut self) -> Self {
        self.config.scheduler.autostart = false;
        self
    }

    pub fn with_hud(mut self) -> Self {
        self.with_hud = true;
        self
    }

    /// Load the craft model through a real asset server from these paths
    pub fn with_model_candidates(mut self, candidates: &[&str]) -> Self {
        self.config.model.enabled = true;
        self.config.model.candidates = candidates.iter().map(|path| path.to_string()).collect();
        self.with_model_assets = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        if self.with_model_assets {
            app.add_plugins((MinimalPlugins, AssetPlugin::default(), GltfPlugin::default()))
                .init_asset::<Mesh>()
                .init_asset::<StandardMaterial>()
                .add_systems(
                    Update,
                    (craft_model_system, attach_fallback_geometry)
                        .chain()
                        .before(FrameSet::Tick),
                );
        } else {
            app.add_plugins(MinimalPlugins);
        }

        app.insert_resource(TimeUpdateStrategy::ManualDuration(self.frame_time))
            .add_plugins(FlightPlugin::with_config(self.config));

        if self.with_hud {
            app.add_plugins(HudPlugin);
        }

        app.finish();
        app.cleanup();

        // Run startup and the first frame
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }

    pub fn craft(&mut self) -> CraftBody {
        *self.query_single::<CraftBody>().expect("craft not spawned")
    }

    pub fn camera(&mut self) -> ChaseCamera {
        *self
            .query_single::<ChaseCamera>()
            .expect("chase camera not spawned")
    }

    pub fn delta(&self) -> FrameDelta {
        *self.get_state::<FrameDelta>().expect("FrameDelta missing")
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        self.get_state::<FrameScheduler>()
            .expect("FrameScheduler missing")
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        let mut keys = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(key);
        keys.clear();
    }

    /// Press for exactly one frame.
    pub fn tap(&mut self, key: KeyCode) {
        self.press(key);
        self.run_frame();
        self.release(key);
    }

    pub fn send_control(&mut self, control: FrameControl) {
        self.app.world_mut().send_event(control);
    }

    pub fn hud_text(&mut self, field: HudField) -> Option<String> {
        let world = self.app.world_mut();
        let mut query = world.query::<(&HudField, &Text)>();
        query
            .iter(world)
            .find(|(candidate, _)| **candidate == field)
            .map(|(_, text)| text.0.clone())
    }

    pub fn hud_visibility(&mut self) -> Option<Visibility> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Visibility, With<HudRoot>>();
        query.get_single(world).ok().copied()
    }
}
