use approx::assert_relative_eq;
use nalgebra::Vector3;
use skyrunner::{
    components::{CraftBody, RunwaySegment},
    resources::{FlightConfig, RunwayWindow},
};

use crate::common::TestApp;

/// Assert the craft is inside the flight envelope
#[track_caller]
pub fn assert_body_within_envelope(body: &CraftBody, config: &FlightConfig) {
    assert!(
        body.position.iter().all(|v| v.is_finite()),
        "Position is not finite"
    );
    assert!(
        body.velocity.iter().all(|v| v.is_finite()),
        "Velocity is not finite"
    );
    assert!(
        body.speed() <= config.speed_ceiling(true) + 1e-9,
        "Speed {} above ceiling",
        body.speed()
    );
    assert!(
        (config.min_altitude..=config.max_altitude).contains(&body.position.y),
        "Altitude {} outside [{}, {}]",
        body.position.y,
        config.min_altitude,
        config.max_altitude
    );
    assert!(
        body.orientation.pitch.abs() <= config.max_pitch + 1e-12,
        "Pitch {} beyond limit",
        body.orientation.pitch
    );
}

#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Live segment entities match the window, one entity per live index
#[track_caller]
pub fn assert_window_consistent(test_app: &mut TestApp) {
    let mut indices: Vec<i64> = test_app
        .query_all::<RunwaySegment>()
        .iter()
        .map(|segment| segment.index)
        .collect();
    indices.sort_unstable();

    let window = test_app
        .get_state::<RunwayWindow>()
        .expect("RunwayWindow missing");
    let live: Vec<i64> = window.indices().collect();
    assert!(window.len() <= window.capacity());
    assert_eq!(indices, live);
}
