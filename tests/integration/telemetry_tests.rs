use bevy::prelude::*;
use pretty_assertions::assert_eq;
use skyrunner::{
    components::CraftVisual,
    resources::{FlightTelemetry, FrameControl, HudCommand, HudReadout, TelemetrySinks},
    systems::{HudField, HudReceiver, HudRoot},
};

use crate::common::{attach_recording_sink, hold_keys, set_visual, TestAppBuilder};

#[test]
fn test_sinks_follow_loop_lifecycle() {
    let mut app = TestAppBuilder::new().without_autostart().build();
    let recorder = attach_recording_sink(&mut app);

    app.run_frame();
    assert!(recorder.try_recv().is_err(), "stopped loop must stay silent");

    app.send_control(FrameControl::Start);
    app.run_frame();
    let received: Vec<HudCommand> = recorder.try_iter().collect();
    assert_eq!(received.first(), Some(&HudCommand::Show));
    assert!(matches!(received.last(), Some(HudCommand::Update(_))));

    app.send_control(FrameControl::Stop);
    app.run_frame();
    let received: Vec<HudCommand> = recorder.try_iter().collect();
    assert_eq!(received, vec![HudCommand::Hide]);
}

#[test]
fn test_no_updates_before_craft_resolves() {
    let mut app = TestAppBuilder::new().without_autostart().build();
    set_visual(&mut app, CraftVisual::Pending);
    let recorder = attach_recording_sink(&mut app);

    app.send_control(FrameControl::Start);
    app.run_steps(5);
    let received: Vec<HudCommand> = recorder.try_iter().collect();
    assert_eq!(received, vec![HudCommand::Show]);

    set_visual(&mut app, CraftVisual::Fallback);
    app.run_frame();
    let received: Vec<HudCommand> = recorder.try_iter().collect();
    assert_eq!(
        received,
        vec![HudCommand::Update(HudReadout {
            speed_kmh: 0,
            altitude_m: 10,
            boost: false,
        })]
    );
}

#[test]
fn test_one_update_per_frame() {
    let mut app = TestAppBuilder::new().build();
    let recorder = attach_recording_sink(&mut app);

    app.run_steps(10);
    let updates = recorder
        .try_iter()
        .filter(|command| matches!(command, HudCommand::Update(_)))
        .count();
    assert_eq!(updates, 10);
}

#[test]
fn test_update_matches_published_telemetry() {
    let mut app = TestAppBuilder::new().build();
    let recorder = attach_recording_sink(&mut app);

    hold_keys(&mut app, &[KeyCode::KeyW, KeyCode::ShiftLeft], 60);

    let telemetry = *app.get_state::<FlightTelemetry>().unwrap();
    let last = recorder
        .try_iter()
        .filter_map(|command| match command {
            HudCommand::Update(readout) => Some(readout),
            _ => None,
        })
        .last();
    assert_eq!(last, Some(HudReadout::from_telemetry(&telemetry)));
    assert!(telemetry.boost_active);
}

#[test]
fn test_exit_disposes_sinks_once() {
    let mut app = TestAppBuilder::new().build();
    let recorder = attach_recording_sink(&mut app);

    app.app.world_mut().send_event(AppExit::Success);
    app.run_frame();
    assert!(app.get_state::<TelemetrySinks>().unwrap().is_disposed());

    let disposals = recorder
        .try_iter()
        .filter(|command| *command == HudCommand::Dispose)
        .count();
    assert_eq!(disposals, 1);

    // Nothing reaches a sink after disposal
    app.run_steps(5);
    assert!(recorder.try_recv().is_err());
}

#[test]
fn test_hud_shows_readout_while_running() {
    let mut app = TestAppBuilder::new().with_hud().build();
    assert_eq!(app.hud_visibility(), Some(Visibility::Inherited));

    hold_keys(&mut app, &[KeyCode::KeyW], 90);

    let expected = HudReadout::from_telemetry(app.get_state::<FlightTelemetry>().unwrap());
    assert_eq!(
        app.hud_text(HudField::Speed),
        Some(expected.speed_kmh.to_string())
    );
    assert_eq!(
        app.hud_text(HudField::Altitude),
        Some(expected.altitude_m.to_string())
    );
    assert!(expected.speed_kmh > 0);
}

#[test]
fn test_hud_hidden_while_paused() {
    let mut app = TestAppBuilder::new().with_hud().without_autostart().build();
    assert_eq!(app.hud_visibility(), Some(Visibility::Hidden));

    app.send_control(FrameControl::Start);
    app.run_frame();
    assert_eq!(app.hud_visibility(), Some(Visibility::Inherited));

    app.tap(KeyCode::KeyP);
    assert_eq!(app.hud_visibility(), Some(Visibility::Hidden));
}

#[test]
fn test_hud_removed_on_exit() {
    let mut app = TestAppBuilder::new().with_hud().build();

    app.app.world_mut().send_event(AppExit::Success);
    app.run_steps(2);

    let world = app.app.world_mut();
    let mut roots = world.query_filtered::<Entity, With<HudRoot>>();
    assert_eq!(roots.iter(world).count(), 0);
    assert!(app.get_state::<HudReceiver>().is_none());
    assert_eq!(app.hud_text(HudField::Speed), None);
}
