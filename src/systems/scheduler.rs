use bevy::prelude::*;

use crate::resources::{FrameControl, FrameDelta, FrameScheduler, SchedulerConfig, TelemetrySinks};

/// Applies pending start/stop requests, then ticks the scheduler against the
/// real clock and publishes the result for the rest of the frame.
pub fn frame_tick_system(
    mut scheduler: ResMut<FrameScheduler>,
    mut delta: ResMut<FrameDelta>,
    mut controls: EventReader<FrameControl>,
    mut sinks: ResMut<TelemetrySinks>,
    time: Res<Time<Real>>,
) {
    let now = time.elapsed();

    for control in controls.read() {
        match control {
            FrameControl::Start => {
                if scheduler.start(now) {
                    info!("Frame loop started");
                    sinks.show();
                }
            }
            FrameControl::Stop => {
                if scheduler.stop() {
                    info!(
                        "Frame loop stopped after {} frames",
                        scheduler.frame_count()
                    );
                    sinks.hide();
                }
            }
        }
    }

    *delta = match scheduler.tick(now) {
        Some(elapsed) => FrameDelta {
            delta: elapsed,
            ticked: true,
        },
        None => FrameDelta::default(),
    };
}

pub fn autostart_scheduler(config: Res<SchedulerConfig>, mut controls: EventWriter<FrameControl>) {
    if config.autostart {
        controls.send(FrameControl::Start);
    }
}

/// `P` toggles between running and paused.
pub fn pause_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    scheduler: Res<FrameScheduler>,
    mut controls: EventWriter<FrameControl>,
) {
    if keyboard.just_pressed(KeyCode::KeyP) {
        if scheduler.is_running() {
            controls.send(FrameControl::Stop);
        } else {
            controls.send(FrameControl::Start);
        }
    }
}
