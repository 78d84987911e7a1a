use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Chase camera placement and smoothing.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseCameraConfig {
    /// Distance behind the craft along its nose axis
    pub distance: f64,
    /// Height above the craft along world up
    pub height: f64,
    /// Position blend factor per frame
    pub smoothness: f64,
    /// Look-at blend relative to `smoothness`
    pub look_blend_multiplier: f64,
    /// Distance ahead of the craft the camera aims at
    pub look_ahead: f64,
    pub initial_position: Vector3<f64>,
    pub initial_look_at: Vector3<f64>,
    /// Vertical field of view [deg]
    pub fov: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for ChaseCameraConfig {
    fn default() -> Self {
        Self {
            distance: 8.0,
            height: 3.0,
            smoothness: 0.25,
            look_blend_multiplier: 3.0,
            look_ahead: 5.0,
            initial_position: Vector3::new(0.0, 5.0, -95.0),
            initial_look_at: Vector3::new(0.0, 2.0, -80.0),
            fov: 75.0,
            znear: 0.1,
            zfar: 5000.0,
        }
    }
}

impl ChaseCameraConfig {
    pub fn look_smoothness(&self) -> f64 {
        (self.smoothness * self.look_blend_multiplier).min(1.0)
    }
}
