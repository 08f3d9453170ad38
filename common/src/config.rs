//! HUD configuration.
//!
//! Values the panel only reads: version, declination, traffic manager address,
//! ownship identity and the sensor enable flag, plus the refresh periods.
//! Loaded from TOML; every field has a default so a partial file (or none at
//! all) is valid.
//!
//! ```toml
//! declination = 15.3
//! traffic_manager_address = "192.168.10.1"
//! aithre_enabled = false
//! address_refresh_frames = 240
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::probes::DEFAULT_THERMAL_ZONE;
use crate::timer::{ADDRESS_REFRESH_FRAMES, CPU_TEMP_REFRESH_FRAMES};

/// Software version shown on the panel.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default traffic manager endpoint.
pub const DEFAULT_TRAFFIC_MANAGER: &str = "localhost:8000";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub version: String,
    /// Magnetic declination in degrees.
    pub declination: f32,
    pub traffic_manager_address: String,
    /// Whether a CO sensor is expected. Absent + enabled reads DISCONNECTED.
    pub aithre_enabled: bool,
    pub ownship_mode_s: u32,
    pub ownship_icao: String,
    pub address_refresh_frames: u32,
    pub cpu_temp_refresh_frames: u32,
    pub thermal_zone_path: PathBuf,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            version: VERSION.to_owned(),
            declination: 0.0,
            traffic_manager_address: DEFAULT_TRAFFIC_MANAGER.to_owned(),
            aithre_enabled: true,
            ownship_mode_s: 0,
            ownship_icao: String::new(),
            address_refresh_frames: ADDRESS_REFRESH_FRAMES,
            cpu_temp_refresh_frames: CPU_TEMP_REFRESH_FRAMES,
            thermal_zone_path: PathBuf::from(DEFAULT_THERMAL_ZONE),
        }
    }
}

impl HudConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> { Ok(toml::from_str(text)?) }

    /// Read and parse the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
