use bevy::prelude::*;
use crossbeam_channel::Receiver;

use crate::resources::{HudCommand, HudReadout};

const HUD_CYAN: Color = Color::srgb(0.0, 1.0, 1.0);
const PANEL_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
const PANEL_BORDER: Color = Color::srgba(0.0, 1.0, 1.0, 0.5);

const CONTROL_LEGEND: &[&str] = &[
    "W/Up - Forward",
    "S/Down - Backward",
    "A/Left - Left",
    "D/Right - Right",
    "Q/E - Yaw",
    "Shift - Boost",
    "Space - Shoot",
    "P - Pause",
];

/// Receiving end of the HUD telemetry channel.
#[derive(Resource, Deref)]
pub struct HudReceiver(pub Receiver<HudCommand>);

#[derive(Component, Debug)]
pub struct HudRoot;

/// Text node that shows one telemetry value.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudField {
    Speed,
    Altitude,
}

#[derive(Component, Debug)]
pub struct BoostFill;

fn label(text: &str) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(HUD_CYAN),
    )
}

fn panel() -> (Node, BackgroundColor, BorderColor, BorderRadius) {
    (
        Node {
            flex_direction: FlexDirection::Column,
            padding: UiRect::all(Val::Px(15.0)),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(PANEL_BACKGROUND),
        BorderColor(PANEL_BORDER),
        BorderRadius::all(Val::Px(8.0)),
    )
}

fn value_panel(root: &mut ChildBuilder, title: &str, field: HudField, unit: &str) {
    root.spawn(panel()).with_children(|panel| {
        panel.spawn(label(title));
        panel.spawn((
            field,
            Text::new("0"),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(HUD_CYAN),
        ));
        panel.spawn(label(unit));
    });
}

/// Builds the HUD tree. It stays hidden until the loop starts.
pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("hud"),
            HudRoot,
            Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(20.0),
                padding: UiRect::all(Val::Px(20.0)),
                max_width: Val::Px(300.0),
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|root| {
            value_panel(root, "SPEED", HudField::Speed, "km/h");
            value_panel(root, "ALTITUDE", HudField::Altitude, "m");

            root.spawn(panel()).with_children(|panel| {
                panel.spawn(label("BOOST"));
                panel
                    .spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(10.0),
                            margin: UiRect::top(Val::Px(5.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgba(0.0, 1.0, 1.0, 0.2)),
                    ))
                    .with_children(|bar| {
                        bar.spawn((
                            BoostFill,
                            Node {
                                width: Val::Percent(0.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(HUD_CYAN),
                        ));
                    });
            });

            root.spawn(panel()).with_children(|panel| {
                panel.spawn(label("CONTROLS"));
                for line in CONTROL_LEGEND {
                    panel.spawn(label(line));
                }
            });
        });
}

/// Drains the HUD channel. Only the latest readout of a frame is drawn.
pub fn hud_command_system(
    mut commands: Commands,
    receiver: Option<Res<HudReceiver>>,
    mut roots: Query<(Entity, &mut Visibility), With<HudRoot>>,
    mut fields: Query<(&HudField, &mut Text)>,
    mut fills: Query<&mut Node, With<BoostFill>>,
) {
    let Some(receiver) = receiver else {
        return;
    };

    let mut latest: Option<HudReadout> = None;
    for command in receiver.try_iter() {
        match command {
            HudCommand::Update(readout) => latest = Some(readout),
            HudCommand::Show => {
                for (_, mut visibility) in &mut roots {
                    *visibility = Visibility::Inherited;
                }
            }
            HudCommand::Hide => {
                for (_, mut visibility) in &mut roots {
                    *visibility = Visibility::Hidden;
                }
            }
            HudCommand::Dispose => {
                for (entity, _) in &roots {
                    commands.entity(entity).despawn_recursive();
                }
                commands.remove_resource::<HudReceiver>();
                debug!("HUD removed");
                return;
            }
        }
    }

    let Some(readout) = latest else {
        return;
    };
    for (field, mut text) in &mut fields {
        text.0 = match field {
            HudField::Speed => readout.speed_kmh.to_string(),
            HudField::Altitude => readout.altitude_m.to_string(),
        };
    }
    for mut node in &mut fills {
        node.width = Val::Percent(if readout.boost { 100.0 } else { 0.0 });
    }
}
