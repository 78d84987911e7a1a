use bevy::prelude::*;
use pretty_assertions::assert_eq;
use skyrunner::{
    components::{RunwaySegment, StripKind},
    resources::RunwayWindow,
};

use crate::common::{
    assert_window_consistent, create_short_window_config, place_craft, TestAppBuilder,
};

#[test]
fn test_runway_exists_before_first_move() {
    let mut app = TestAppBuilder::new().without_autostart().build();

    // Start position z = -80 keeps segments -3..=4 alive
    let mut indices: Vec<i64> = app
        .query_all::<RunwaySegment>()
        .iter()
        .map(|segment| segment.index)
        .collect();
    indices.sort_unstable();
    assert_eq!(indices, (-3..=4).collect::<Vec<_>>());
    assert_window_consistent(&mut app);
}

#[test]
fn test_window_follows_craft() {
    let mut app = TestAppBuilder::new().build();
    place_craft(&mut app, 0.0, 50.0, 237.0);
    app.run_frame();

    let window = app.get_state::<RunwayWindow>().unwrap();
    let live: Vec<i64> = window.indices().collect();
    assert_eq!(live, (0..=7).collect::<Vec<_>>());
    assert_window_consistent(&mut app);
}

#[test]
fn test_segment_count_stays_bounded_in_flight() {
    let mut app = TestAppBuilder::new()
        .with_config(create_short_window_config())
        .build();
    app.press(KeyCode::KeyW);
    app.press(KeyCode::ShiftLeft);

    for _ in 0..400 {
        app.run_frame();
        assert_window_consistent(&mut app);
    }

    let first_live = app
        .get_state::<RunwayWindow>()
        .and_then(|window| window.indices().next())
        .unwrap();
    assert!(first_live > 0, "window never moved forward");
}

#[test]
fn test_teleport_replaces_whole_window() {
    let mut app = TestAppBuilder::new().build();
    place_craft(&mut app, 0.0, 50.0, 10_000.0);
    app.run_frame();
    assert_window_consistent(&mut app);

    place_craft(&mut app, 0.0, 50.0, -10_000.0);
    app.run_frame();
    assert_window_consistent(&mut app);

    let window = app.get_state::<RunwayWindow>().unwrap();
    assert!(window.indices().all(|index| index < -90));
}

#[test]
fn test_segments_carry_markings() {
    let mut app = TestAppBuilder::new().without_autostart().build();
    for segment in app.query_all::<RunwaySegment>() {
        assert_eq!(segment.strips_of(StripKind::Surface).count(), 1);
        assert_eq!(segment.strips_of(StripKind::EdgeLine).count(), 2);
        assert!(segment.strips_of(StripKind::Dash).count() > 0);
    }
}
