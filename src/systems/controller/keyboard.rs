use bevy::prelude::*;

use crate::components::{ControlAxes, KeyBindings, PlayerController};
use crate::resources::ControlConfig;

/// Samples the keyboard and smooths it into the player's control axes.
pub fn keyboard_input_system(
    mut query: Query<&mut ControlAxes, With<PlayerController>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<ControlConfig>,
) {
    if let Ok(mut axes) = query.get_single_mut() {
        axes.blend(&KeyBindings::intents(&keyboard), config.blend_rate);
    }
}
