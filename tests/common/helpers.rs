use bevy::prelude::*;
use skyrunner::{
    components::{CraftBody, CraftVisual},
    resources::{ChannelSink, HudCommand, SimulationConfig, TelemetrySinks},
};
use crossbeam_channel::Receiver;

use crate::common::TestApp;

/// Configuration with a shorter runway window, for tests that count segments
pub fn create_short_window_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.runway.segment_length = 50.0;
    config.runway.segments_ahead = 3;
    config.runway.segments_behind = 1;
    config
}

/// Attach a channel sink to the running app and return its receiving end
pub fn attach_recording_sink(test_app: &mut TestApp) -> Receiver<HudCommand> {
    let (sink, receiver) = ChannelSink::pair();
    test_app
        .app
        .world_mut()
        .resource_mut::<TelemetrySinks>()
        .attach(sink);
    receiver
}

/// Put the craft at a position and cruise altitude, at rest
pub fn place_craft(test_app: &mut TestApp, x: f64, y: f64, z: f64) {
    if let Some(mut body) = test_app.query_single_mut::<CraftBody>() {
        body.position.x = x;
        body.position.y = y;
        body.position.z = z;
        body.velocity.fill(0.0);
    }
}

pub fn set_visual(test_app: &mut TestApp, visual: CraftVisual) {
    if let Some(mut current) = test_app.query_single_mut::<CraftVisual>() {
        *current = visual;
    }
}

/// Hold keys for a number of frames, then release them
pub fn hold_keys(test_app: &mut TestApp, keys: &[KeyCode], frames: usize) {
    for key in keys {
        test_app.press(*key);
    }
    test_app.run_steps(frames);
    for key in keys {
        test_app.release(*key);
    }
}

/// Waits for a specific condition to be met within a maximum number of steps
pub fn wait_for_condition<F>(test_app: &mut TestApp, condition: F, max_steps: usize) -> bool
where
    F: Fn(&mut TestApp) -> bool,
{
    for _ in 0..max_steps {
        if condition(test_app) {
            return true;
        }
        test_app.run_frame();
    }
    false
}
