pub mod camera;
pub mod controls;
pub mod craft;
pub mod model;
pub mod runway;

pub use camera::ChaseCamera;
pub use controls::{ControlAxes, ControlAxis, Intent, KeyBindings, RawIntents};
pub use craft::{CraftBody, EulerAngles, PlayerController};
pub use model::{CraftVisual, ModelCandidates, PendingModel};
pub use runway::{RunwaySegment, Strip, StripKind};
