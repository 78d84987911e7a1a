use bevy::gltf::Gltf;
use bevy::prelude::*;

/// How the craft is currently drawn.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CraftVisual {
    /// Model still loading; the craft does not fly yet
    #[default]
    Pending,
    /// The loaded scene is attached
    Model,
    /// Every candidate failed; primitive geometry is attached
    Fallback,
}

impl CraftVisual {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, CraftVisual::Pending)
    }
}

/// Asset paths to try for the craft model, in order.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ModelCandidates {
    paths: Vec<String>,
    cursor: usize,
}

impl ModelCandidates {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths, cursor: 0 }
    }

    pub fn current(&self) -> Option<&str> {
        self.paths.get(self.cursor).map(String::as_str)
    }

    /// Drop the current path and return the next one, if any.
    pub fn advance_after_failure(&mut self) -> Option<&str> {
        if self.cursor < self.paths.len() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.paths.len()
    }
}

/// In-flight load of the current candidate.
#[derive(Component, Debug, Clone)]
pub struct PendingModel(pub Handle<Gltf>);
