use bevy::prelude::*;
use std::collections::BTreeMap;
use std::ops::Range;

use crate::resources::RunwayConfig;

/// Creates and releases the per-segment payload held by a [`SegmentWindow`].
pub trait SegmentLifecycle<T> {
    fn spawn(&mut self, index: i64) -> T;
    fn dispose(&mut self, index: i64, value: T);
}

/// What a [`SegmentWindow::sync`] call changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowChange {
    pub spawned: Vec<i64>,
    pub evicted: Vec<i64>,
}

impl WindowChange {
    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty() && self.evicted.is_empty()
    }
}

/// Sliding set of live runway segments keyed by index.
///
/// Segments are owned by the map. Eviction moves the value out and hands it to
/// the lifecycle, so each segment is disposed exactly once.
#[derive(Debug, Clone)]
pub struct SegmentWindow<T> {
    segment_length: f64,
    ahead: u32,
    behind: u32,
    live: BTreeMap<i64, T>,
}

impl<T> SegmentWindow<T> {
    pub fn new(segment_length: f64, ahead: u32, behind: u32) -> Self {
        Self {
            segment_length,
            ahead,
            behind,
            live: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &RunwayConfig) -> Self {
        Self::new(
            config.segment_length,
            config.segments_ahead,
            config.segments_behind,
        )
    }

    pub fn capacity(&self) -> usize {
        self.ahead as usize + self.behind as usize + 1
    }

    /// Half-open range of indices that should be live around `z`.
    pub fn span_for(&self, z: f64) -> Range<i64> {
        let base = z / self.segment_length;
        let min = (base - self.behind as f64).floor() as i64;
        let max = (base + self.ahead as f64).ceil() as i64;
        min..max.min(min + self.capacity() as i64)
    }

    /// Bring the live set in line with `z`: evict first, then fill.
    pub fn sync<L: SegmentLifecycle<T>>(&mut self, z: f64, lifecycle: &mut L) -> WindowChange {
        let span = self.span_for(z);
        let mut change = WindowChange::default();

        let stale: Vec<i64> = self
            .live
            .keys()
            .copied()
            .filter(|index| !span.contains(index))
            .collect();
        for index in stale {
            if let Some(value) = self.live.remove(&index) {
                lifecycle.dispose(index, value);
                change.evicted.push(index);
            }
        }

        for index in span {
            if !self.live.contains_key(&index) {
                let value = lifecycle.spawn(index);
                self.live.insert(index, value);
                change.spawned.push(index);
            }
        }

        change
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn contains(&self, index: i64) -> bool {
        self.live.contains_key(&index)
    }

    pub fn get(&self, index: i64) -> Option<&T> {
        self.live.get(&index)
    }

    pub fn indices(&self) -> impl Iterator<Item = i64> + '_ {
        self.live.keys().copied()
    }

    /// Release every live segment.
    pub fn clear<L: SegmentLifecycle<T>>(&mut self, lifecycle: &mut L) {
        for (index, value) in std::mem::take(&mut self.live) {
            lifecycle.dispose(index, value);
        }
    }
}

/// Live runway segment entities.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct RunwayWindow(pub SegmentWindow<Entity>);

impl RunwayWindow {
    pub fn from_config(config: &RunwayConfig) -> Self {
        Self(SegmentWindow::from_config(config))
    }
}
