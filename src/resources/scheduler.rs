use bevy::prelude::*;
use std::time::Duration;

/// Start/stop state of the single simulation loop.
///
/// The clock is supplied by the caller so the same logic runs against
/// `Time<Real>` in the app and against plain durations in tests.
#[derive(Resource, Debug, Clone)]
pub struct FrameScheduler {
    running: bool,
    last_time: Duration,
    max_delta: Duration,
    frame_count: u64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::utils::MAX_FRAME_DELTA_MS))
    }
}

impl FrameScheduler {
    pub fn new(max_delta: Duration) -> Self {
        Self {
            running: false,
            last_time: Duration::ZERO,
            max_delta,
            frame_count: 0,
        }
    }

    /// Begin ticking from `now`. Returns `false` if already running.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_time = now;
        true
    }

    /// Stop ticking. Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    /// Elapsed time since the previous tick, clamped to the maximum delta.
    pub fn tick(&mut self, now: Duration) -> Option<Duration> {
        if !self.running {
            return None;
        }
        let delta = now.saturating_sub(self.last_time).min(self.max_delta);
        self.last_time = now;
        self.frame_count += 1;
        Some(delta)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn max_delta(&self) -> Duration {
        self.max_delta
    }
}

/// Result of this frame's tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameDelta {
    pub delta: Duration,
    pub ticked: bool,
}

impl FrameDelta {
    pub fn millis(&self) -> f64 {
        self.delta.as_secs_f64() * 1000.0
    }
}

/// Requests to start or stop the loop.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Start,
    Stop,
}

/// Run condition for everything downstream of the tick.
pub fn frame_ticked(delta: Res<FrameDelta>) -> bool {
    delta.ticked
}
