//! Scripted CO detector for the simulator.
//!
//! Reports `WARMUP` for the first few seconds, then a slow CO wave that
//! crosses the caution and danger bands, with a battery that drains and
//! charges. Once per cycle the CO channel drops out for a second with a read
//! error. `advance` moves the script forward one frame.

use hud_diagnostics_common::error::SensorError;
use hud_diagnostics_common::sensor::GasSensor;
use hud_diagnostics_common::value::MetricValue;

/// Simulated seconds before the first CO reading.
const WARMUP_SECS: f32 = 3.0;

/// Battery percentage below which the detector goes onto its charger.
const CHARGE_BELOW: f32 = 15.0;

/// Battery percentage per simulated second.
const DRAIN_RATE: f32 = 0.8;

/// Simulated seconds between CO dropouts, and where in that cycle they start.
const DROPOUT_EVERY_SECS: f32 = 45.0;
const DROPOUT_AT_SECS: f32 = 30.0;
const DROPOUT_SECS: f32 = 1.0;

pub struct ScriptedSensor {
    t: f32,
    battery: f32,
    charging: bool,
}

impl ScriptedSensor {
    /// Sensor at the start of its warm-up with a full battery.
    pub const fn new() -> Self {
        Self {
            t: 0.0,
            battery: 100.0,
            charging: false,
        }
    }

    /// Move the script forward by `dt` simulated seconds.
    pub fn advance(
        &mut self,
        dt: f32,
    ) {
        self.t += dt;

        if self.charging {
            self.battery = (self.battery + DRAIN_RATE * 4.0 * dt).min(100.0);
            self.charging = self.battery < 100.0;
        } else {
            self.battery = (self.battery - DRAIN_RATE * dt).max(0.0);
            self.charging = self.battery < CHARGE_BELOW;
        }
    }

    fn in_dropout(&self) -> bool {
        let phase = (self.t - WARMUP_SECS) % DROPOUT_EVERY_SECS;
        (DROPOUT_AT_SECS..DROPOUT_AT_SECS + DROPOUT_SECS).contains(&phase)
    }
}

impl Default for ScriptedSensor {
    fn default() -> Self { Self::new() }
}

impl GasSensor for ScriptedSensor {
    fn co_level(&mut self) -> Result<MetricValue, SensorError> {
        if self.t < WARMUP_SECS {
            return Ok(MetricValue::Text("WARMUP".into()));
        }
        if self.in_dropout() {
            return Err(SensorError::Read("co channel checksum mismatch".into()));
        }
        Ok(MetricValue::Numeric(fake_signal(self.t - WARMUP_SECS, 0.0, 70.0, 0.1).round()))
    }

    fn battery(&mut self) -> Result<MetricValue, SensorError> {
        if self.charging {
            return Ok(MetricValue::Text("CHG".into()));
        }
        Ok(MetricValue::Numeric(self.battery.round()))
    }
}

/// Sine wave between `min` and `max`, starting at `min`.
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).cos().mul_add(-0.5, 0.5);
    min + normalized * (max - min)
}
