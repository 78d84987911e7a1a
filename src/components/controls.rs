use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::lerp;

/// A directional control that is smoothed into a scalar in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlAxis {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}

impl ControlAxis {
    pub const ALL: [ControlAxis; 8] = [
        ControlAxis::Forward,
        ControlAxis::Backward,
        ControlAxis::StrafeLeft,
        ControlAxis::StrafeRight,
        ControlAxis::YawLeft,
        ControlAxis::YawRight,
        ControlAxis::RollLeft,
        ControlAxis::RollRight,
    ];
}

/// Anything a key can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Axis(ControlAxis),
    Boost,
    Fire,
}

/// Boolean intents sampled from the keyboard for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawIntents {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub boost: bool,
    pub fire: bool,
}

impl RawIntents {
    pub fn get(&self, intent: Intent) -> bool {
        match intent {
            Intent::Axis(axis) => *self.axis_slot(axis),
            Intent::Boost => self.boost,
            Intent::Fire => self.fire,
        }
    }

    pub fn set(&mut self, intent: Intent, value: bool) {
        match intent {
            Intent::Axis(axis) => *self.axis_slot_mut(axis) = value,
            Intent::Boost => self.boost = value,
            Intent::Fire => self.fire = value,
        }
    }

    fn axis_slot(&self, axis: ControlAxis) -> &bool {
        match axis {
            ControlAxis::Forward => &self.forward,
            ControlAxis::Backward => &self.backward,
            ControlAxis::StrafeLeft => &self.strafe_left,
            ControlAxis::StrafeRight => &self.strafe_right,
            ControlAxis::YawLeft => &self.yaw_left,
            ControlAxis::YawRight => &self.yaw_right,
            ControlAxis::RollLeft => &self.roll_left,
            ControlAxis::RollRight => &self.roll_right,
        }
    }

    fn axis_slot_mut(&mut self, axis: ControlAxis) -> &mut bool {
        match axis {
            ControlAxis::Forward => &mut self.forward,
            ControlAxis::Backward => &mut self.backward,
            ControlAxis::StrafeLeft => &mut self.strafe_left,
            ControlAxis::StrafeRight => &mut self.strafe_right,
            ControlAxis::YawLeft => &mut self.yaw_left,
            ControlAxis::YawRight => &mut self.yaw_right,
            ControlAxis::RollLeft => &mut self.roll_left,
            ControlAxis::RollRight => &mut self.roll_right,
        }
    }
}

/// The fixed keyboard layout.
///
/// Lateral keys are listed under both strafe and roll: A/D slide the craft
/// sideways and bank it at the same time. Arrow keys only strafe.
pub struct KeyBindings;

impl KeyBindings {
    pub const TABLE: &'static [(Intent, &'static [KeyCode])] = &[
        (
            Intent::Axis(ControlAxis::Forward),
            &[KeyCode::KeyW, KeyCode::ArrowUp],
        ),
        (
            Intent::Axis(ControlAxis::Backward),
            &[KeyCode::KeyS, KeyCode::ArrowDown],
        ),
        (
            Intent::Axis(ControlAxis::StrafeLeft),
            &[KeyCode::KeyA, KeyCode::ArrowLeft],
        ),
        (
            Intent::Axis(ControlAxis::StrafeRight),
            &[KeyCode::KeyD, KeyCode::ArrowRight],
        ),
        (Intent::Axis(ControlAxis::RollLeft), &[KeyCode::KeyA]),
        (Intent::Axis(ControlAxis::RollRight), &[KeyCode::KeyD]),
        (Intent::Axis(ControlAxis::YawLeft), &[KeyCode::KeyQ]),
        (Intent::Axis(ControlAxis::YawRight), &[KeyCode::KeyE]),
        (Intent::Boost, &[KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        (Intent::Fire, &[KeyCode::Space]),
    ];

    /// Derive this frame's intents from the held keys.
    pub fn intents(keys: &ButtonInput<KeyCode>) -> RawIntents {
        let mut raw = RawIntents::default();
        for (intent, codes) in Self::TABLE {
            if keys.any_pressed(codes.iter().copied()) {
                raw.set(*intent, true);
            }
        }
        raw
    }
}

/// Smoothed control snapshot of the craft.
///
/// Directional axes follow their raw targets with a first-order lag; boost and
/// fire are passed through unfiltered.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlAxes {
    pub forward: f64,
    pub backward: f64,
    pub strafe_left: f64,
    pub strafe_right: f64,
    pub yaw_left: f64,
    pub yaw_right: f64,
    pub roll_left: f64,
    pub roll_right: f64,
    pub boost: bool,
    pub fire: bool,
}

impl ControlAxes {
    pub fn axis(&self, axis: ControlAxis) -> f64 {
        match axis {
            ControlAxis::Forward => self.forward,
            ControlAxis::Backward => self.backward,
            ControlAxis::StrafeLeft => self.strafe_left,
            ControlAxis::StrafeRight => self.strafe_right,
            ControlAxis::YawLeft => self.yaw_left,
            ControlAxis::YawRight => self.yaw_right,
            ControlAxis::RollLeft => self.roll_left,
            ControlAxis::RollRight => self.roll_right,
        }
    }

    fn axis_mut(&mut self, axis: ControlAxis) -> &mut f64 {
        match axis {
            ControlAxis::Forward => &mut self.forward,
            ControlAxis::Backward => &mut self.backward,
            ControlAxis::StrafeLeft => &mut self.strafe_left,
            ControlAxis::StrafeRight => &mut self.strafe_right,
            ControlAxis::YawLeft => &mut self.yaw_left,
            ControlAxis::YawRight => &mut self.yaw_right,
            ControlAxis::RollLeft => &mut self.roll_left,
            ControlAxis::RollRight => &mut self.roll_right,
        }
    }

    /// Move every axis a fraction `rate` of the way toward its raw target.
    pub fn blend(&mut self, raw: &RawIntents, rate: f64) {
        for axis in ControlAxis::ALL {
            let target = if raw.get(Intent::Axis(axis)) { 1.0 } else { 0.0 };
            let slot = self.axis_mut(axis);
            *slot = lerp(*slot, target, rate);
        }
        self.boost = raw.boost;
        self.fire = raw.fire;
    }

    /// Whether `axis` is held strongly enough to act on.
    pub fn engaged(&self, axis: ControlAxis, threshold: f64) -> bool {
        self.axis(axis) > threshold
    }
}
