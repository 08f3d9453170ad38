//! System diagnostics panel for the HUD.
//!
//! Shared between the desktop simulator and the display host:
//!
//! - [`sampler`]: per-metric refresh timers and cached samples
//! - [`probes`]: network address and CPU temperature probes
//! - [`sensor`]: the optional CO/battery sensor seam
//! - [`presenter`]: turns config, samples and sensor state into panel rows
//! - [`layout`]: positions and draws the rows
//! - [`co_alert`]: the standalone CO readout
//! - [`gradient`], [`bands`], [`tone`]: value to color/severity mapping
//! - [`config`]: TOML-backed `HudConfig`
//! - [`profiling`]: event log and render timing

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod bands;
pub mod co_alert;
pub mod colors;
pub mod config;
pub mod error;
pub mod gradient;
pub mod layout;
pub mod probe;
pub mod probes;
pub mod presenter;
pub mod profiling;
pub mod sampler;
pub mod sensor;
pub mod thresholds;
pub mod timer;
pub mod tone;
pub mod value;

// Re-export commonly used items
pub use co_alert::CoAlert;
pub use config::HudConfig;
pub use error::{ConfigError, ProbeError, SensorError};
pub use layout::SystemInfoPanel;
pub use presenter::{StatusPresenter, StatusRow};
pub use sampler::{DiagnosticsSampler, MetricId};
pub use sensor::{GasSensor, NoSensor, SensorProvider};
pub use tone::Tone;
pub use value::{MetricValue, Sample};
