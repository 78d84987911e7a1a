use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::EulerAngles;
use crate::resources::ChaseCameraConfig;
use crate::utils::lerp_vector;

/// Low-pass filtered chase camera pose.
///
/// Both values trail targets derived from the craft pose, so a jump in the
/// craft never becomes a jump in the camera.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaseCamera {
    pub current_position: Vector3<f64>,
    pub current_look_at: Vector3<f64>,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self::from_config(&ChaseCameraConfig::default())
    }
}

impl ChaseCamera {
    pub fn from_config(config: &ChaseCameraConfig) -> Self {
        Self {
            current_position: config.initial_position,
            current_look_at: config.initial_look_at,
        }
    }

    /// Unfiltered eye and aim points for a craft pose.
    pub fn targets(
        position: &Vector3<f64>,
        orientation: &EulerAngles,
        config: &ChaseCameraConfig,
    ) -> (Vector3<f64>, Vector3<f64>) {
        let forward = orientation.forward();
        let eye = position - forward * config.distance + Vector3::y() * config.height;
        let aim = position + forward * config.look_ahead;
        (eye, aim)
    }

    /// Move one frame toward the targets for the given craft pose.
    pub fn advance(
        &mut self,
        position: &Vector3<f64>,
        orientation: &EulerAngles,
        config: &ChaseCameraConfig,
    ) {
        let (eye, aim) = Self::targets(position, orientation, config);
        self.current_position = lerp_vector(&self.current_position, &eye, config.smoothness);
        self.current_look_at =
            lerp_vector(&self.current_look_at, &aim, config.look_smoothness());
    }
}
