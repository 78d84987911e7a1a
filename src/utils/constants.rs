/// Frame rate the flight and input constants were tuned against [Hz]
pub const REFERENCE_FRAME_RATE: f64 = 60.0;
/// Milliseconds to reference-frame scaling used by the flight model
pub const FRAME_TIME_NORMALIZATION: f64 = 0.016;

/// Largest elapsed time handed to the update pass [ms]
pub const MAX_FRAME_DELTA_MS: u64 = 100;

/// Smoothed control axes below this value count as released
pub const AXIS_ENGAGE_THRESHOLD: f64 = 1e-3;

/// Telemetry speed to HUD km/h scale
pub const SPEED_DISPLAY_SCALE: f64 = 150.0;
/// HUD speed readout cap [km/h]
pub const SPEED_DISPLAY_CAP_KMH: i64 = 300;
