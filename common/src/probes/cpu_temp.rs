//! CPU temperature from the Linux thermal zone.
//!
//! The kernel reports millidegrees Celsius as a decimal integer. Platforms
//! without the file (desktop dev machines) read as unavailable.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ProbeError;
use crate::gradient::CPU_TEMP_GRADIENT;
use crate::probe::Probe;
use crate::value::{MetricValue, Sample, format_value};

/// SoC thermal zone on the Raspberry Pi.
pub const DEFAULT_THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Shown when no temperature can be read.
const UNAVAILABLE_MARKER: &str = "---";

pub struct CpuTempProbe {
    path: PathBuf,
}

impl CpuTempProbe {
    /// Probe reading the thermal zone file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Turn the raw thermal zone contents into a sample.
    pub fn parse(
        &self,
        raw: &str,
    ) -> Result<Sample, ProbeError> {
        let millidegrees: f32 = raw
            .trim()
            .parse()
            .ok()
            .filter(|v: &f32| v.is_finite())
            .ok_or_else(|| ProbeError::Parse {
                what: "cpu temperature",
                raw: raw.trim().to_owned(),
            })?;

        let celsius = millidegrees / 1000.0;
        let whole = celsius.floor() as i32;

        Ok(Sample::new(
            MetricValue::Numeric(celsius),
            format_value(format_args!("{whole}C")),
            CPU_TEMP_GRADIENT.tone_at(celsius),
            CPU_TEMP_GRADIENT.color_at(celsius),
        ))
    }
}

impl Default for CpuTempProbe {
    fn default() -> Self { Self::new(DEFAULT_THERMAL_ZONE) }
}

impl Probe for CpuTempProbe {
    fn read(&mut self) -> Result<Sample, ProbeError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| ProbeError::Io {
            what: "cpu temperature",
            source,
        })?;
        self.parse(&raw)
    }

    fn unknown(&self) -> Sample { Sample::unavailable(UNAVAILABLE_MARKER) }
}
