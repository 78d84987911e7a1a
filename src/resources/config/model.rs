use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Where the craft model comes from and how it is fitted to the body.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftModelConfig {
    /// Load the model through the asset server; when off the craft flies with
    /// the fallback body from the first frame
    pub enabled: bool,
    /// Asset paths tried in order
    pub candidates: Vec<String>,
    /// Uniform scale applied to the loaded scene
    pub scale: f32,
    /// Yaw correction so the model nose points along +Z [rad]
    pub yaw_offset: f32,
}

impl Default for CraftModelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            candidates: vec!["plane/scene.gltf".to_string(), "plane/scene.glb".to_string()],
            scale: 1.0,
            yaw_offset: FRAC_PI_2,
        }
    }
}
