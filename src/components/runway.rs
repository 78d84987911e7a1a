use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::RunwayConfig;

/// Surface height of the runway slab.
pub const SURFACE_ELEVATION: f64 = 0.0;
/// Painted lines sit just above the surface.
pub const LINE_ELEVATION: f64 = 0.01;
/// Dashes sit above the lines they cross.
pub const DASH_ELEVATION: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StripKind {
    Surface,
    CenterLine,
    EdgeLine,
    Dash,
}

/// Flat axis-aligned rectangle lying in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strip {
    pub kind: StripKind,
    /// Centre of the rectangle in world space
    pub center: Vector3<f64>,
    /// Extent across the runway (X)
    pub width: f64,
    /// Extent along the runway (Z)
    pub length: f64,
}

/// One streamed piece of runway, identified by its integer index along Z.
///
/// Segment `i` covers `[i * L, (i + 1) * L)` along the runway.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwaySegment {
    pub index: i64,
    pub strips: Vec<Strip>,
}

impl RunwaySegment {
    /// Lay out the surface and markings of segment `index`.
    pub fn synthesize(index: i64, config: &RunwayConfig) -> Self {
        let length = config.segment_length;
        let start = index as f64 * length;
        let center_z = start + length * 0.5;
        let half_width = config.width * 0.5;

        let mut strips = vec![
            Strip {
                kind: StripKind::Surface,
                center: Vector3::new(0.0, SURFACE_ELEVATION, center_z),
                width: config.width,
                length,
            },
            Strip {
                kind: StripKind::CenterLine,
                center: Vector3::new(0.0, LINE_ELEVATION, center_z),
                width: config.center_line_width,
                length,
            },
        ];

        for side in [-1.0, 1.0] {
            strips.push(Strip {
                kind: StripKind::EdgeLine,
                center: Vector3::new(side * half_width, LINE_ELEVATION, center_z),
                width: config.edge_line_width,
                length,
            });
        }

        // Dash starts are spaced by the gap; the last one may overhang the
        // segment end and overlap the next segment's first dash region.
        let dash_count = (length / config.dash_gap).ceil() as usize;
        for n in 0..dash_count {
            let dash_start = start + n as f64 * config.dash_gap;
            strips.push(Strip {
                kind: StripKind::Dash,
                center: Vector3::new(0.0, DASH_ELEVATION, dash_start + config.dash_length * 0.5),
                width: config.dash_width,
                length: config.dash_length,
            });
        }

        Self { index, strips }
    }

    pub fn strips_of(&self, kind: StripKind) -> impl Iterator<Item = &Strip> {
        self.strips.iter().filter(move |strip| strip.kind == kind)
    }

    pub fn center_z(&self) -> f64 {
        self.strips
            .first()
            .map(|surface| surface.center.z)
            .unwrap_or_default()
    }
}
