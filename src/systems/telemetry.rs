use bevy::prelude::*;

use crate::components::{CraftVisual, PlayerController};
use crate::resources::{FlightTelemetry, TelemetrySinks};

/// Feeds the sinks once the craft flies. A craft still waiting for its model
/// has no telemetry worth showing.
pub fn publish_telemetry_system(
    telemetry: Res<FlightTelemetry>,
    craft: Query<&CraftVisual, With<PlayerController>>,
    mut sinks: ResMut<TelemetrySinks>,
) {
    if craft.get_single().is_ok_and(CraftVisual::is_resolved) {
        sinks.update(&telemetry);
    }
}

/// Releases every sink once the app is asked to exit.
pub fn dispose_telemetry_on_exit(
    mut exits: EventReader<AppExit>,
    mut sinks: ResMut<TelemetrySinks>,
) {
    if exits.read().next().is_some() && !sinks.is_disposed() {
        info!("Disposing {} telemetry sinks", sinks.len());
        sinks.dispose();
    }
}
