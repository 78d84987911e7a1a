pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use plugins::{FlightPlugin, FlightRenderPlugin, HudPlugin};
pub use resources::SimulationConfig;
pub use utils::{Result, SimError};
