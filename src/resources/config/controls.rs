use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Per-frame blend of smoothed axes toward their raw targets
    pub blend_rate: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self { blend_rate: 0.2 }
    }
}
