mod flight;
mod hud;
mod render;
mod staging;

pub use flight::FlightPlugin;
pub use hud::HudPlugin;
pub use render::FlightRenderPlugin;
pub use staging::{FrameSet, StartupSequencePlugin, StartupStage};
