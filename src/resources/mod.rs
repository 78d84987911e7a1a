pub mod config;
mod runway;
mod scheduler;
mod telemetry;
mod waves;

pub use config::{
    ChaseCameraConfig, ControlConfig, CraftModelConfig, FlightConfig, OceanConfig, RunwayConfig,
    SchedulerConfig, SimulationConfig,
};
pub use runway::{RunwayWindow, SegmentLifecycle, SegmentWindow, WindowChange};
pub use scheduler::{frame_ticked, FrameControl, FrameDelta, FrameScheduler};
pub use telemetry::{
    ChannelSink, FlightTelemetry, HudCommand, HudReadout, LogSink, TelemetrySink, TelemetrySinks,
};
pub use waves::WaveField;
