mod camera_tests;
mod model_tests;
mod runway_tests;
mod telemetry_tests;
