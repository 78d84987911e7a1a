mod camera;
mod controller;
pub mod hud;
pub mod physics;
pub mod render;
mod scheduler;
mod telemetry;
mod world;

pub use camera::chase_camera_system;
pub use controller::keyboard_input_system;
pub use hud::{hud_command_system, spawn_hud, BoostFill, HudField, HudReceiver, HudRoot};
pub use physics::{flight_physics_system, integrate_flight};
pub use render::{
    attach_fallback_geometry, attach_segment_meshes, camera_transform_system,
    craft_model_system, craft_transform_system, decorate_chase_camera, ocean_surface_system,
    setup_environment, setup_runway_assets,
};
pub use scheduler::{autostart_scheduler, frame_tick_system, pause_toggle_system};
pub use telemetry::{dispose_telemetry_on_exit, publish_telemetry_system};
pub use world::{runway_window_system, wave_clock_system};
