//! Status classification and row composition for the system info panel.
//!
//! # Row Order
//!
//! Rows are returned bottom-first: the first row is drawn lowest on screen
//! and each following row stacks above it.
//!
//! ```text
//! DISPLAY RES : 640 x 480        <- last row, top
//! OWNSHIP     : 11259375/N701GV
//! HUD CPU     : 52C
//! AITHRE      : co:4ppm bat:90%
//! IP          : 10.0.0.2          (one row per address)
//! IP          : 192.168.1.5
//! TRAFFIC     : localhost:8000
//! DECLINATION : 0.0
//! VERSION     : 0.1.0            <- first row, bottom
//! ```
//!
//! # CO Sensor States
//!
//! | Handle  | Enabled | Text                | Color                   |
//! |---------|---------|---------------------|-------------------------|
//! | absent  | no      | `DISABLED`          | neutral                 |
//! | absent  | yes     | `DISCONNECTED`      | error                   |
//! | present | any     | `co:..ppm bat:..%`  | worst of both readings  |

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Size;
use tracing::warn;

use crate::bands::{BATTERY_BANDS, BandSpec, CO_BANDS};
use crate::colors::{BLUE, ERROR_COLOR, NEUTRAL_COLOR, YELLOW};
use crate::config::HudConfig;
use crate::error::SensorError;
use crate::sampler::{DiagnosticsSampler, MetricId};
use crate::sensor::SensorProvider;
use crate::tone::Tone;
use crate::value::{MetricValue, Sample, ValueText, format_value, value_text};

// =============================================================================
// Labels
// =============================================================================

pub const VERSION_LABEL: &str = "VERSION     : ";
pub const DECLINATION_LABEL: &str = "DECLINATION : ";
pub const TRAFFIC_LABEL: &str = "TRAFFIC     : ";
pub const IP_LABEL: &str = "IP          : ";
pub const AITHRE_LABEL: &str = "AITHRE      : ";
pub const HUD_CPU_LABEL: &str = "HUD CPU     : ";
pub const OWNSHIP_LABEL: &str = "OWNSHIP     : ";
pub const DISPLAY_RES_LABEL: &str = "DISPLAY RES : ";

pub const DISABLED_TEXT: &str = "DISABLED";
pub const DISCONNECTED_TEXT: &str = "DISCONNECTED";

/// Component text when the device has no value for it.
const MISSING_TEXT: &str = "UNK";

/// Component text when reading it failed.
const FAILED_TEXT: &str = "ERR";

// =============================================================================
// Rows
// =============================================================================

/// One line of the panel. Only `text` is drawn in `color`; the label always
/// uses the label color.
#[derive(Clone, PartialEq, Debug)]
pub struct StatusRow {
    pub label: &'static str,
    pub text: ValueText,
    pub color: Rgb888,
}

impl StatusRow {
    /// Create a row; only `text` is drawn in `color`.
    pub const fn new(
        label: &'static str,
        text: ValueText,
        color: Rgb888,
    ) -> Self {
        Self { label, text, color }
    }

    fn from_sample(
        label: &'static str,
        sample: &Sample,
    ) -> Self {
        Self::new(label, sample.text.clone(), sample.color)
    }
}

/// State of the CO sensor row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SensorStatus {
    /// Turned off in the configuration.
    Disabled,
    /// Expected but not attached.
    Disconnected,
    /// Attached; `tone` is the worst of its readings.
    Reporting { tone: Tone },
}

impl SensorStatus {
    pub const fn color(self) -> Rgb888 {
        match self {
            Self::Disabled => NEUTRAL_COLOR,
            Self::Disconnected => ERROR_COLOR,
            Self::Reporting { tone } => tone.combined_color(),
        }
    }
}

// =============================================================================
// Presenter
// =============================================================================

pub struct StatusPresenter {
    config: HudConfig,
    framebuffer_size: Size,
    co_bands: BandSpec,
    battery_bands: BandSpec,
}

impl StatusPresenter {
    /// Presenter for `config` on a framebuffer of `framebuffer_size`, with
    /// the default CO and battery bands.
    pub const fn new(
        config: HudConfig,
        framebuffer_size: Size,
    ) -> Self {
        Self {
            config,
            framebuffer_size,
            co_bands: CO_BANDS,
            battery_bands: BATTERY_BANDS,
        }
    }

    /// Replace the CO and battery bands.
    #[must_use]
    pub fn with_bands(
        mut self,
        co_bands: BandSpec,
        battery_bands: BandSpec,
    ) -> Self {
        self.co_bands = co_bands;
        self.battery_bands = battery_bands;
        self
    }

    /// The configuration the rows are built from.
    pub const fn config(&self) -> &HudConfig { &self.config }

    /// Compose this frame's rows, bottom row first.
    pub fn build_rows(
        &self,
        sampler: &DiagnosticsSampler,
        sensors: &mut dyn SensorProvider,
    ) -> Vec<StatusRow> {
        let config = &self.config;
        let mut rows = vec![
            StatusRow::new(VERSION_LABEL, value_text(&config.version), YELLOW),
            StatusRow::new(
                DECLINATION_LABEL,
                declination_text(config.declination),
                BLUE,
            ),
            StatusRow::new(TRAFFIC_LABEL, value_text(&config.traffic_manager_address), BLUE),
        ];

        let address = sampler
            .sample(MetricId::Address)
            .cloned()
            .unwrap_or_else(|| Sample::unknown("UNKNOWN"));
        rows.extend(address_rows(&address));

        let (status, text) = self.sensor_status(sensors);
        rows.push(StatusRow::new(AITHRE_LABEL, text, status.color()));

        let cpu = sampler
            .sample(MetricId::CpuTemp)
            .cloned()
            .unwrap_or_else(|| Sample::unavailable("---"));
        rows.push(StatusRow::from_sample(HUD_CPU_LABEL, &cpu));

        rows.push(StatusRow::new(
            OWNSHIP_LABEL,
            format_value(format_args!("{}/{}", config.ownship_mode_s, config.ownship_icao)),
            BLUE,
        ));
        rows.push(StatusRow::new(
            DISPLAY_RES_LABEL,
            format_value(format_args!(
                "{} x {}",
                self.framebuffer_size.width, self.framebuffer_size.height
            )),
            BLUE,
        ));

        rows
    }

    /// Classify the CO sensor and build its row text.
    pub fn sensor_status(
        &self,
        sensors: &mut dyn SensorProvider,
    ) -> (SensorStatus, ValueText) {
        let Some(sensor) = sensors.sensor() else {
            return if self.config.aithre_enabled {
                (SensorStatus::Disconnected, value_text(DISCONNECTED_TEXT))
            } else {
                (SensorStatus::Disabled, value_text(DISABLED_TEXT))
            };
        };

        let (co_text, co_tone) = self.co_part(sensor.co_level());
        let (battery_text, battery_tone) = self.battery_part(sensor.battery());

        let tone = Tone::worst_of([co_tone, battery_tone]);
        let text = format_value(format_args!("{co_text} {battery_text}"));
        (SensorStatus::Reporting { tone }, text)
    }

    fn co_part(
        &self,
        reading: Result<MetricValue, SensorError>,
    ) -> (ValueText, Tone) {
        match reading {
            Ok(MetricValue::Numeric(ppm)) => (format_value(format_args!("co:{ppm}ppm")), self.co_bands.tone_of(ppm)),
            Ok(MetricValue::Text(token)) => (format_value(format_args!("co:{token}")), Tone::Unknown),
            Ok(MetricValue::Unknown) => (value_text(MISSING_TEXT), Tone::Unknown),
            Err(err) => {
                warn!(error = %err, "co level read failed");
                (value_text(FAILED_TEXT), Tone::Unknown)
            }
        }
    }

    fn battery_part(
        &self,
        reading: Result<MetricValue, SensorError>,
    ) -> (ValueText, Tone) {
        match reading {
            Ok(MetricValue::Numeric(pct)) => (
                format_value(format_args!("bat:{pct}%")),
                self.battery_bands.tone_of(pct),
            ),
            // Status tokens (e.g. charging) carry no unit and no alarm
            Ok(MetricValue::Text(token)) => (format_value(format_args!("bat:{token}")), Tone::Safe),
            Ok(MetricValue::Unknown) => (value_text(MISSING_TEXT), Tone::Danger),
            Err(err) => {
                warn!(error = %err, "battery read failed");
                (value_text(FAILED_TEXT), Tone::Unknown)
            }
        }
    }
}

/// Declination as configured: whole degrees keep one decimal (`15.0`),
/// anything else shows every significant digit (`-15.25`).
fn declination_text(declination: f32) -> ValueText {
    if declination.is_finite() && declination.fract() == 0.0 {
        format_value(format_args!("{declination:.1}"))
    } else {
        format_value(format_args!("{declination}"))
    }
}

/// One row per address, all in the address sample's color.
fn address_rows(sample: &Sample) -> Vec<StatusRow> {
    let source = match &sample.value {
        MetricValue::Text(list) => list.as_str(),
        _ => sample.text.as_str(),
    };

    let rows: Vec<StatusRow> = source
        .split_whitespace()
        .map(|addr| StatusRow::new(IP_LABEL, value_text(addr), sample.color))
        .collect();

    if rows.is_empty() {
        vec![StatusRow::from_sample(IP_LABEL, sample)]
    } else {
        rows
    }
}
