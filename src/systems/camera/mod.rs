mod controller;

pub use controller::chase_camera_system;
