use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Backdrop surfaces: the animated ocean and the static grass plane.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanConfig {
    pub size: f32,
    pub subdivisions: u32,
    pub elevation: f32,
    pub wave_amplitude: f64,
    /// Spatial frequency of the wave terms [1/m]
    pub wave_frequency: f64,
    /// Wave clock advance per elapsed millisecond
    pub time_scale: f64,
    pub ground_size: f32,
    pub ground_elevation: f32,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            size: 5000.0,
            subdivisions: 50,
            elevation: -100.0,
            wave_amplitude: 2.0,
            wave_frequency: 0.1,
            time_scale: 0.001,
            ground_size: 10000.0,
            ground_elevation: -0.1,
        }
    }
}
