use bevy::prelude::*;

use crate::components::{ChaseCamera, CraftBody};
use crate::utils::to_render;

/// Copies the simulated craft pose into its render transform.
pub fn craft_transform_system(mut query: Query<(&CraftBody, &mut Transform), Changed<CraftBody>>) {
    for (body, mut transform) in &mut query {
        transform.translation = to_render(&body.position);
        transform.rotation = body.orientation.to_quat();
    }
}

/// Points each chase camera from its blended position at its blended aim.
pub fn camera_transform_system(mut query: Query<(&ChaseCamera, &mut Transform)>) {
    for (camera, mut transform) in &mut query {
        let eye = to_render(&camera.current_position);
        let aim = to_render(&camera.current_look_at);
        if eye.distance_squared(aim) > f32::EPSILON {
            *transform = Transform::from_translation(eye).looking_at(aim, Vec3::Y);
        } else {
            transform.translation = eye;
        }
    }
}
