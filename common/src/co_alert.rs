//! Standalone CO readout shown on the main HUD view.
//!
//! Unlike the panel row, this element stays blank until the sensor has
//! produced a first real reading. After that, losing the reading shows
//! `OFFLINE` rather than going blank, so a dropout is never mistaken for
//! "no sensor fitted".

use embedded_graphics::pixelcolor::Rgb888;
use tracing::warn;

use crate::bands::{BandSpec, CO_BANDS};
use crate::colors::ERROR_COLOR;
use crate::sensor::SensorProvider;
use crate::value::{MetricValue, ValueText, format_value, value_text};

pub const OFFLINE_TEXT: &str = "OFFLINE";

pub struct CoAlert {
    bands: BandSpec,
    has_been_connected: bool,
}

impl CoAlert {
    /// Readout using the default CO bands.
    pub const fn new() -> Self { Self::with_bands(CO_BANDS) }

    /// Readout colored by `bands`.
    pub const fn with_bands(bands: BandSpec) -> Self {
        Self {
            bands,
            has_been_connected: false,
        }
    }

    /// Whether a numeric reading has ever been seen.
    #[inline]
    pub const fn has_been_connected(&self) -> bool { self.has_been_connected }

    /// Text and color to draw this frame, or `None` to draw nothing.
    pub fn update(
        &mut self,
        sensors: &mut dyn SensorProvider,
        enabled: bool,
    ) -> Option<(ValueText, Rgb888)> {
        if !enabled {
            return None;
        }
        let sensor = sensors.sensor()?;

        let reading = sensor.co_level().unwrap_or_else(|err| {
            warn!(error = %err, "co level read failed");
            MetricValue::Unknown
        });

        match reading.as_number().filter(|ppm| ppm.is_finite()) {
            Some(ppm) => {
                self.has_been_connected = true;
                let whole = ppm as i32;
                Some((format_value(format_args!("{whole} PPM")), self.bands.color_of(ppm)))
            }
            None if self.has_been_connected => Some((value_text(OFFLINE_TEXT), ERROR_COLOR)),
            None => None,
        }
    }
}

impl Default for CoAlert {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::colors::{BLUE, RED, YELLOW};
    use crate::error::SensorError;
    use crate::sensor::{GasSensor, NoSensor};

    struct Script(VecDeque<Result<MetricValue, SensorError>>);

    impl GasSensor for Script {
        fn co_level(&mut self) -> Result<MetricValue, SensorError> { self.0.pop_front().unwrap_or(Ok(MetricValue::Unknown)) }

        fn battery(&mut self) -> Result<MetricValue, SensorError> { Ok(MetricValue::Numeric(100.0)) }
    }

    fn script(readings: Vec<Result<MetricValue, SensorError>>) -> Option<Script> { Some(Script(readings.into())) }

    #[test]
    fn test_blank_until_first_reading() {
        let mut alert = CoAlert::new();
        let mut sensors = script(vec![Ok(MetricValue::Unknown), Ok(MetricValue::Text("WARMUP".into()))]);
        assert_eq!(alert.update(&mut sensors, true), None);
        assert_eq!(alert.update(&mut sensors, true), None);
        assert!(!alert.has_been_connected());
    }

    #[test]
    fn test_reading_then_offline() {
        let mut alert = CoAlert::new();
        let mut sensors = script(vec![
            Ok(MetricValue::Numeric(7.6)),
            Ok(MetricValue::Numeric(25.0)),
            Err(SensorError::Disconnected),
        ]);

        let (text, color) = alert.update(&mut sensors, true).unwrap();
        assert_eq!(text.as_str(), "7 PPM");
        assert_eq!(color, BLUE);

        let (text, color) = alert.update(&mut sensors, true).unwrap();
        assert_eq!(text.as_str(), "25 PPM");
        assert_eq!(color, YELLOW);

        let (text, color) = alert.update(&mut sensors, true).unwrap();
        assert_eq!(text.as_str(), "OFFLINE");
        assert_eq!(color, RED);
    }

    #[test]
    fn test_disabled_or_absent_draws_nothing() {
        let mut alert = CoAlert::new();
        let mut sensors = script(vec![Ok(MetricValue::Numeric(5.0))]);
        assert_eq!(alert.update(&mut sensors, false), None);
        assert_eq!(alert.update(&mut NoSensor, true), None);
    }
}
