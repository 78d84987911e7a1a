use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::MAX_FRAME_DELTA_MS;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Ceiling on the elapsed time of a single tick [ms]
    pub max_delta_ms: u64,
    /// Start ticking as soon as the app starts
    pub autostart: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_delta_ms: MAX_FRAME_DELTA_MS,
            autostart: true,
        }
    }
}

impl SchedulerConfig {
    pub fn max_delta(&self) -> Duration {
        Duration::from_millis(self.max_delta_ms)
    }
}
