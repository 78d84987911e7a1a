use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};

use crate::utils::{SPEED_DISPLAY_CAP_KMH, SPEED_DISPLAY_SCALE};

/// Flight values published once per frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    pub speed: f64,
    pub altitude: f64,
    pub boost_active: bool,
}

/// Receiver of per-frame telemetry.
///
/// Implementations must not block; they are called from the frame loop.
pub trait TelemetrySink: Send + Sync {
    fn update(&mut self, telemetry: &FlightTelemetry);
    fn show(&mut self);
    fn hide(&mut self);
    fn dispose(&mut self);
}

/// Every sink attached to the simulation.
#[derive(Resource, Default)]
pub struct TelemetrySinks {
    sinks: Vec<Box<dyn TelemetrySink>>,
    disposed: bool,
}

impl TelemetrySinks {
    pub fn attach(&mut self, sink: impl TelemetrySink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn update(&mut self, telemetry: &FlightTelemetry) {
        if self.disposed {
            return;
        }
        for sink in &mut self.sinks {
            sink.update(telemetry);
        }
    }

    pub fn show(&mut self) {
        if self.disposed {
            return;
        }
        for sink in &mut self.sinks {
            sink.show();
        }
    }

    pub fn hide(&mut self) {
        if self.disposed {
            return;
        }
        for sink in &mut self.sinks {
            sink.hide();
        }
    }

    /// Dispose every sink. Later calls do nothing.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        for sink in &mut self.sinks {
            sink.dispose();
        }
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Telemetry rounded to what the HUD shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudReadout {
    pub speed_kmh: i64,
    pub altitude_m: i64,
    pub boost: bool,
}

impl HudReadout {
    pub fn from_telemetry(telemetry: &FlightTelemetry) -> Self {
        let speed_kmh = ((telemetry.speed * SPEED_DISPLAY_SCALE).round() as i64)
            .min(SPEED_DISPLAY_CAP_KMH);
        Self {
            speed_kmh,
            altitude_m: telemetry.altitude.round() as i64,
            boost: telemetry.boost_active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudCommand {
    Update(HudReadout),
    Show,
    Hide,
    Dispose,
}

/// Forwards telemetry to the HUD over a channel.
pub struct ChannelSink {
    sender: Sender<HudCommand>,
}

impl ChannelSink {
    pub fn new(sender: Sender<HudCommand>) -> Self {
        Self { sender }
    }

    /// A sink paired with the receiver the HUD drains.
    pub fn pair() -> (Self, Receiver<HudCommand>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self::new(sender), receiver)
    }

    fn send(&self, command: HudCommand) {
        match self.sender.try_send(command) {
            Ok(()) => {}
            Err(TrySendError::Disconnected(_)) => {
                debug!("HUD receiver gone, dropping {:?}", command);
            }
            Err(TrySendError::Full(_)) => {
                warn!("HUD channel full, dropping {:?}", command);
            }
        }
    }
}

impl TelemetrySink for ChannelSink {
    fn update(&mut self, telemetry: &FlightTelemetry) {
        self.send(HudCommand::Update(HudReadout::from_telemetry(telemetry)));
    }

    fn show(&mut self) {
        self.send(HudCommand::Show);
    }

    fn hide(&mut self) {
        self.send(HudCommand::Hide);
    }

    fn dispose(&mut self) {
        self.send(HudCommand::Dispose);
    }
}

/// Writes telemetry to the debug log every `interval` updates.
pub struct LogSink {
    interval: u64,
    updates: u64,
}

impl LogSink {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            updates: 0,
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(60)
    }
}

impl TelemetrySink for LogSink {
    fn update(&mut self, telemetry: &FlightTelemetry) {
        if self.updates % self.interval == 0 {
            debug!(
                "telemetry: speed {:.3} altitude {:.1} boost {}",
                telemetry.speed, telemetry.altitude, telemetry.boost_active
            );
        }
        self.updates += 1;
    }

    fn show(&mut self) {
        debug!("telemetry resumed");
    }

    fn hide(&mut self) {
        debug!("telemetry paused");
    }

    fn dispose(&mut self) {
        debug!("telemetry closed after {} updates", self.updates);
    }
}
