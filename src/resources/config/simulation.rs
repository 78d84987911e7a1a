use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    ChaseCameraConfig, ControlConfig, CraftModelConfig, FlightConfig, OceanConfig, RunwayConfig,
    SchedulerConfig,
};
use crate::utils::{Result, SimError};

/// Complete configuration of a flight session, one section per concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub flight: FlightConfig,
    pub controls: ControlConfig,
    pub camera: ChaseCameraConfig,
    pub runway: RunwayConfig,
    pub ocean: OceanConfig,
    pub scheduler: SchedulerConfig,
    pub model: CraftModelConfig,
}

impl SimulationConfig {
    /// Load a configuration from a `.yaml`/`.yml` or `.json` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let file = std::fs::File::open(path)?;
        let config: Self = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_reader(file)?,
            Some("json") => serde_json::from_reader(file)?,
            other => {
                return Err(SimError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        let runway = &self.runway;
        if runway.segment_length <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "runway.segment_length must be positive, got {}",
                runway.segment_length
            )));
        }
        if runway.dash_gap <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "runway.dash_gap must be positive, got {}",
                runway.dash_gap
            )));
        }

        let flight = &self.flight;
        if flight.min_altitude > flight.max_altitude {
            return Err(SimError::InvalidConfig(format!(
                "flight altitude bounds inverted: [{}, {}]",
                flight.min_altitude, flight.max_altitude
            )));
        }
        if flight.max_speed <= 0.0 || flight.boost_multiplier < 1.0 {
            return Err(SimError::InvalidConfig(
                "flight.max_speed must be positive and boost_multiplier at least 1".to_string(),
            ));
        }

        for (name, rate) in [
            ("controls.blend_rate", self.controls.blend_rate),
            ("camera.smoothness", self.camera.smoothness),
            ("flight.angular_blend", flight.angular_blend),
        ] {
            if !(rate > 0.0 && rate <= 1.0) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must lie in (0, 1], got {rate}"
                )));
            }
        }

        if self.scheduler.max_delta_ms == 0 {
            return Err(SimError::InvalidConfig(
                "scheduler.max_delta_ms must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
