use bevy::prelude::*;
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Orientation as three independent Euler angles, applied X (pitch), then Y
/// (yaw), then Z (roll). All angles in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl EulerAngles {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Body-to-world rotation.
    pub fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.roll)
    }

    /// Unit nose direction (body +Z) in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.rotation() * Vector3::z()
    }

    /// Unit starboard direction (body +X) in world space.
    pub fn right(&self) -> Vector3<f64> {
        self.rotation() * Vector3::x()
    }

    /// Same rotation for the render transform.
    pub fn to_quat(&self) -> Quat {
        Quat::from_rotation_x(self.pitch as f32)
            * Quat::from_rotation_y(self.yaw as f32)
            * Quat::from_rotation_z(self.roll as f32)
    }
}

/// Rigid body state of the controllable craft.
///
/// World frame is Y-up with +Z along the runway.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraftBody {
    /// Position in world space
    pub position: Vector3<f64>,

    /// Attitude as Euler angles
    pub orientation: EulerAngles,

    /// Linear velocity in world space [units / reference frame]
    pub velocity: Vector3<f64>,

    /// Per-axis rotation rate [rad / reference frame]
    pub angular_velocity: Vector3<f64>,
}

impl Default for CraftBody {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: EulerAngles::default(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl CraftBody {
    /// Create a body at rest at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

/// Marks the craft driven by the keyboard.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PlayerController;
