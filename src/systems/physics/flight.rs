use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{ControlAxes, ControlAxis, CraftBody, CraftVisual, PlayerController};
use crate::resources::{FlightConfig, FlightTelemetry, FrameDelta};
use crate::utils::{clamp_magnitude, lerp_vector};

/// What an engaged control axis asks of the craft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Along the nose, scaled by the boosted speed ceiling
    Thrust,
    /// Against the nose, scaled by the reverse ratio
    Reverse,
    /// Along the starboard axis, signed, scaled by the lateral ratio
    Strafe(f64),
    /// Roll rate, signed
    Roll(f64),
    /// Yaw rate, signed
    Yaw(f64),
}

/// Opposing translation intents. Within a group the first engaged axis wins.
pub const THRUST_PRECEDENCE: &[&[(ControlAxis, Effect)]] = &[
    &[
        (ControlAxis::Forward, Effect::Thrust),
        (ControlAxis::Backward, Effect::Reverse),
    ],
    &[
        (ControlAxis::StrafeLeft, Effect::Strafe(-1.0)),
        (ControlAxis::StrafeRight, Effect::Strafe(1.0)),
    ],
];

/// Opposing rotation intents. Within a group the first engaged axis wins.
pub const ROTATION_PRECEDENCE: &[&[(ControlAxis, Effect)]] = &[
    &[
        (ControlAxis::RollLeft, Effect::Roll(1.0)),
        (ControlAxis::RollRight, Effect::Roll(-1.0)),
    ],
    &[
        (ControlAxis::YawLeft, Effect::Yaw(1.0)),
        (ControlAxis::YawRight, Effect::Yaw(-1.0)),
    ],
];

/// Winning `(effect, axis value)` of each group.
pub fn resolve<'a>(
    table: &'a [&'a [(ControlAxis, Effect)]],
    axes: &'a ControlAxes,
    threshold: f64,
) -> impl Iterator<Item = (Effect, f64)> + 'a {
    table.iter().filter_map(move |group| {
        group
            .iter()
            .find(|(axis, _)| axes.engaged(*axis, threshold))
            .map(|(axis, effect)| (*effect, axes.axis(*axis)))
    })
}

fn desired_velocity(
    axes: &ControlAxes,
    forward: &Vector3<f64>,
    right: &Vector3<f64>,
    config: &FlightConfig,
) -> Vector3<f64> {
    let ceiling = config.speed_ceiling(axes.boost);
    resolve(THRUST_PRECEDENCE, axes, config.engage_threshold).fold(
        Vector3::zeros(),
        |desired, (effect, value)| match effect {
            Effect::Thrust => desired + forward * value * ceiling,
            Effect::Reverse => desired - forward * value * config.max_speed * config.reverse_ratio,
            Effect::Strafe(sign) => {
                desired + right * sign * value * config.max_speed * config.lateral_ratio
            }
            _ => desired,
        },
    )
}

fn desired_spin(axes: &ControlAxes, config: &FlightConfig) -> Vector3<f64> {
    resolve(ROTATION_PRECEDENCE, axes, config.engage_threshold).fold(
        Vector3::zeros(),
        |desired, (effect, value)| match effect {
            Effect::Roll(sign) => desired + Vector3::z() * sign * value * config.roll_rate,
            Effect::Yaw(sign) => desired + Vector3::y() * sign * value * config.yaw_rate,
            _ => desired,
        },
    )
}

/// Advance the craft by `delta_ms` of wall time and report the new telemetry.
pub fn integrate_flight(
    body: &mut CraftBody,
    axes: &ControlAxes,
    config: &FlightConfig,
    delta_ms: f64,
) -> FlightTelemetry {
    let step = config.step_scale(delta_ms);
    let forward = body.orientation.forward();
    let right = body.orientation.right();

    // Linear motion
    let desired = desired_velocity(axes, &forward, &right, config);
    let rate = if desired != Vector3::zeros() {
        config.acceleration
    } else {
        config.deceleration
    };
    let factor = (rate * step).min(config.max_blend_per_step);
    body.velocity = lerp_vector(&body.velocity, &desired, factor);
    body.velocity *= config.drag;
    body.velocity = clamp_magnitude(&body.velocity, config.speed_ceiling(axes.boost));
    body.position += body.velocity * step;

    // Rotation
    let spin = desired_spin(axes, config);
    body.angular_velocity = lerp_vector(&body.angular_velocity, &spin, config.angular_blend);
    body.orientation.roll += body.angular_velocity.z * step;
    body.orientation.yaw += body.angular_velocity.y * step;
    body.angular_velocity *= config.angular_damping;

    body.orientation.pitch = body
        .orientation
        .pitch
        .clamp(-config.max_pitch, config.max_pitch);

    let rolling = axes.engaged(ControlAxis::RollLeft, config.engage_threshold)
        || axes.engaged(ControlAxis::RollRight, config.engage_threshold);
    if !rolling {
        body.orientation.roll *= config.auto_level_decay;
        if body.orientation.roll.abs() < config.auto_level_epsilon {
            body.orientation.roll = 0.0;
        }
    }

    body.position.y = body
        .position
        .y
        .clamp(config.min_altitude, config.max_altitude);

    FlightTelemetry {
        speed: body.speed().min(config.display_speed_cap()),
        altitude: body.position.y,
        boost_active: axes.boost,
    }
}

/// Integrates the player craft once it has something to draw.
pub fn flight_physics_system(
    mut query: Query<(&mut CraftBody, &ControlAxes, &CraftVisual), With<PlayerController>>,
    config: Res<FlightConfig>,
    delta: Res<FrameDelta>,
    mut telemetry: ResMut<FlightTelemetry>,
) {
    let Ok((mut body, axes, visual)) = query.get_single_mut() else {
        return;
    };
    if !visual.is_resolved() {
        return;
    }
    *telemetry = integrate_flight(&mut body, axes, &config, delta.millis());
}
