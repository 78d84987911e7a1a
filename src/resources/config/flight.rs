use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::{AXIS_ENGAGE_THRESHOLD, FRAME_TIME_NORMALIZATION, REFERENCE_FRAME_RATE};

/// Tuning of the arcade flight model.
///
/// Rates and factors are expressed per reference frame (60 Hz); the integrator
/// rescales them with [`FlightConfig::step_scale`].
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Cruise speed ceiling [world units / reference frame]
    pub max_speed: f64,
    /// Velocity blend rate while any thrust is commanded
    pub acceleration: f64,
    /// Velocity blend rate with no thrust commanded
    pub deceleration: f64,
    /// Upper bound on the velocity blend factor per step
    pub max_blend_per_step: f64,
    /// Multiplicative drag applied every step
    pub drag: f64,
    /// Speed ceiling multiplier while boost is held
    pub boost_multiplier: f64,
    /// Reverse thrust as a fraction of `max_speed`
    pub reverse_ratio: f64,
    /// Strafe thrust as a fraction of `max_speed`
    pub lateral_ratio: f64,
    /// Commanded roll rate [rad / reference frame]
    pub roll_rate: f64,
    /// Commanded yaw rate [rad / reference frame]
    pub yaw_rate: f64,
    /// Angular velocity blend factor per step
    pub angular_blend: f64,
    /// Multiplicative angular velocity damping per step
    pub angular_damping: f64,
    /// Roll decay factor while no roll is commanded
    pub auto_level_decay: f64,
    /// Roll magnitude below which auto-level snaps to zero [rad]
    pub auto_level_epsilon: f64,
    /// Pitch limit, symmetric [rad]
    pub max_pitch: f64,
    /// Altitude floor [m]
    pub min_altitude: f64,
    /// Altitude ceiling [m]
    pub max_altitude: f64,
    /// Telemetry speed cap as a fraction of `max_speed`
    pub speed_display_ratio: f64,
    /// Axis value above which a smoothed control counts as engaged
    pub engage_threshold: f64,
    /// Craft position at startup
    pub start_position: Vector3<f64>,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            max_speed: 0.5,
            acceleration: 0.005,
            deceleration: 0.01,
            max_blend_per_step: 0.05,
            drag: 0.95,
            boost_multiplier: 1.5,
            reverse_ratio: 0.4,
            lateral_ratio: 0.6,
            roll_rate: 0.02,
            yaw_rate: 0.015,
            angular_blend: 0.2,
            angular_damping: 0.92,
            auto_level_decay: 0.98,
            auto_level_epsilon: 0.01,
            max_pitch: PI / 3.0,
            min_altitude: 10.0,
            max_altitude: 500.0,
            speed_display_ratio: 1.2,
            engage_threshold: AXIS_ENGAGE_THRESHOLD,
            start_position: Vector3::new(0.0, 2.0, -80.0),
        }
    }
}

impl FlightConfig {
    /// Number of reference frames represented by `delta_ms` of real time.
    pub fn step_scale(&self, delta_ms: f64) -> f64 {
        delta_ms * FRAME_TIME_NORMALIZATION * REFERENCE_FRAME_RATE
    }

    /// Velocity magnitude ceiling for the current boost state.
    pub fn speed_ceiling(&self, boost: bool) -> f64 {
        if boost {
            self.max_speed * self.boost_multiplier
        } else {
            self.max_speed
        }
    }

    /// Largest speed reported to telemetry.
    pub fn display_speed_cap(&self) -> f64 {
        self.max_speed * self.speed_display_ratio
    }
}
