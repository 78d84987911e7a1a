use bevy::prelude::*;

use crate::components::{ChaseCamera, CraftBody, PlayerController};
use crate::resources::ChaseCameraConfig;

/// Eases every chase camera toward its target behind the player craft.
pub fn chase_camera_system(
    mut camera_query: Query<&mut ChaseCamera>,
    target_query: Query<&CraftBody, With<PlayerController>>,
    config: Res<ChaseCameraConfig>,
) {
    let Ok(body) = target_query.get_single() else {
        return;
    };
    for mut camera in &mut camera_query {
        camera.advance(&body.position, &body.orientation, &config);
    }
}
