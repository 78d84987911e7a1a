mod assertions;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_body_within_envelope, assert_position_eq, assert_window_consistent};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
