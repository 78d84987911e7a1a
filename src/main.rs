use bevy::prelude::*;
use std::env;

use skyrunner::{FlightPlugin, FlightRenderPlugin, HudPlugin, SimError, SimulationConfig};

/// Usage: `skyrunner [config.yaml|config.json]`
fn main() -> Result<(), SimError> {
    let config = match env::args().nth(1) {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Skyrunner".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            FlightPlugin::with_config(config),
            FlightRenderPlugin,
            HudPlugin,
        ))
        .run();

    Ok(())
}
