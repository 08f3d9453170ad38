//! Error types.
//!
//! Probe and sensor errors never reach the frame driver: the sampler and the
//! presenter turn them into display states. Only [`ConfigError`] is returned
//! to a caller, at startup.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Why a probe could not produce a reading.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to read {what}: {source}")]
    Io {
        what: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("could not parse {what} from {raw:?}")]
    Parse { what: &'static str, raw: String },

    #[error("{what} did not answer within {timeout:?}")]
    Timeout { what: &'static str, timeout: Duration },

    #[error("{what} returned no value")]
    Empty { what: &'static str },
}

/// Why a peripheral sensor read failed.
#[derive(Debug, Error)]
pub enum SensorError {
    #[error("sensor read failed: {0}")]
    Read(String),

    #[error("sensor stopped responding")]
    Disconnected,
}

/// Why the HUD configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
