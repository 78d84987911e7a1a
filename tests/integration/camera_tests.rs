use approx::assert_relative_eq;
use bevy::prelude::*;
use nalgebra::Vector3;
use skyrunner::{
    components::{ChaseCamera, CraftVisual},
    resources::ChaseCameraConfig,
};

use crate::common::{assert_position_eq, place_craft, set_visual, TestAppBuilder};

#[test]
fn test_camera_starts_behind_the_craft() {
    let mut app = TestAppBuilder::new().without_autostart().build();
    let camera = app.camera();
    assert_position_eq(&camera.current_position, &Vector3::new(0.0, 5.0, -95.0), 1e-12);
    assert_position_eq(&camera.current_look_at, &Vector3::new(0.0, 2.0, -80.0), 1e-12);
}

#[test]
fn test_camera_moves_continuously() {
    let mut app = TestAppBuilder::new().build();
    let config = app
        .get_state::<ChaseCameraConfig>()
        .cloned()
        .unwrap_or_default();
    app.press(KeyCode::KeyW);
    app.press(KeyCode::KeyQ);

    for _ in 0..200 {
        let before = app.camera();
        app.run_frame();
        let after = app.camera();
        let body = app.craft();

        let (eye, _) = ChaseCamera::targets(&body.position, &body.orientation, &config);
        let gap = (eye - before.current_position).norm();
        let moved = (after.current_position - before.current_position).norm();
        assert_relative_eq!(moved, gap * config.smoothness, epsilon = 1e-9);
    }
}

#[test]
fn test_camera_settles_on_parked_craft() {
    let mut app = TestAppBuilder::new().build();
    let config = app
        .get_state::<ChaseCameraConfig>()
        .cloned()
        .unwrap_or_default();
    place_craft(&mut app, 0.0, 100.0, 400.0);
    app.run_steps(300);

    let body = app.craft();
    let camera = app.camera();
    let (eye, aim) = ChaseCamera::targets(&body.position, &body.orientation, &config);
    assert_position_eq(&camera.current_position, &eye, 1e-6);
    assert_position_eq(&camera.current_look_at, &aim, 1e-6);
}

#[test]
fn test_camera_tracks_while_model_loads() {
    let mut app = TestAppBuilder::new().build();
    set_visual(&mut app, CraftVisual::Pending);
    let before = app.camera();
    app.run_steps(5);
    assert_ne!(app.camera(), before);
}

#[test]
fn test_camera_transform_looks_at_blend() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(10);
    let camera = app.camera();

    let world = app.app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<ChaseCamera>>();
    let transform = *query.single(world);

    let aim = Vec3::new(
        camera.current_look_at.x as f32,
        camera.current_look_at.y as f32,
        camera.current_look_at.z as f32,
    );
    let eye = transform.translation;
    let looking = transform.forward().as_vec3();
    let expected = (aim - eye).normalize();
    assert_relative_eq!(looking.dot(expected), 1.0, epsilon = 1e-4);
}
