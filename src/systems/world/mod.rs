mod runway;

use bevy::prelude::*;

use crate::resources::{FrameDelta, WaveField};

pub use runway::runway_window_system;

/// Advances the ocean clock by this frame's elapsed time.
pub fn wave_clock_system(delta: Res<FrameDelta>, mut waves: ResMut<WaveField>) {
    waves.advance(delta.millis());
}
