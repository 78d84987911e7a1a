use bevy::prelude::*;

use crate::resources::OceanConfig;

/// Clock and height field of the decorative ocean.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WaveField {
    pub time: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub time_scale: f64,
}

impl Default for WaveField {
    fn default() -> Self {
        Self::from_config(&OceanConfig::default())
    }
}

impl WaveField {
    pub fn from_config(config: &OceanConfig) -> Self {
        Self {
            time: 0.0,
            amplitude: config.wave_amplitude,
            frequency: config.wave_frequency,
            time_scale: config.time_scale,
        }
    }

    pub fn advance(&mut self, delta_ms: f64) {
        self.time += delta_ms * self.time_scale;
    }

    /// Surface offset at a point of the ocean plane.
    pub fn height(&self, x: f64, z: f64) -> f64 {
        (self.frequency * x + self.time).sin()
            * (self.frequency * z + self.time).cos()
            * self.amplitude
    }
}
