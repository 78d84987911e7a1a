use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Geometry and streaming window of the infinite runway.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunwayConfig {
    pub width: f64,
    /// Forward length of one segment
    pub segment_length: f64,
    /// Segments kept ahead of the craft
    pub segments_ahead: u32,
    /// Segments kept behind the craft
    pub segments_behind: u32,
    pub center_line_width: f64,
    pub edge_line_width: f64,
    pub dash_length: f64,
    /// Spacing between dash starts
    pub dash_gap: f64,
    pub dash_width: f64,
}

impl Default for RunwayConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            segment_length: 100.0,
            segments_ahead: 5,
            segments_behind: 2,
            center_line_width: 0.5,
            edge_line_width: 0.3,
            dash_length: 5.0,
            dash_gap: 10.0,
            dash_width: 2.0,
        }
    }
}
