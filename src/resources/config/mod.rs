pub mod camera;
pub mod controls;
pub mod flight;
pub mod model;
pub mod ocean;
pub mod runway;
pub mod scheduler;
pub mod simulation;

pub use camera::ChaseCameraConfig;
pub use controls::ControlConfig;
pub use flight::FlightConfig;
pub use model::CraftModelConfig;
pub use ocean::OceanConfig;
pub use runway::RunwayConfig;
pub use scheduler::SchedulerConfig;
pub use simulation::SimulationConfig;
