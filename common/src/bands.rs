//! Discrete three-band classification (safe / caution / danger).
//!
//! Each metric declares which way is worse: CO concentration gets worse as it
//! rises, battery charge gets worse as it falls.

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::{BLUE, GREEN};
use crate::thresholds::{BATTERY_SAFE, BATTERY_WARNING, CO_SAFE, CO_WARNING};
use crate::tone::Tone;

/// Which way along the scale a reading gets worse.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// `v > danger_limit` is danger, `v > safe_limit` is caution.
    HigherIsWorse,
    /// `v >= safe_limit` is safe, `v >= danger_limit` is caution.
    LowerIsWorse,
}

/// Two cut points partitioning a metric into three bands.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BandSpec {
    pub safe_limit: f32,
    pub danger_limit: f32,
    pub direction: Direction,
    /// Color of the safe band; caution and danger use the tone colors.
    pub safe_color: Rgb888,
}

/// Carbon monoxide in PPM.
pub const CO_BANDS: BandSpec = BandSpec::higher_is_worse(CO_SAFE, CO_WARNING, BLUE);

/// Sensor battery charge in percent.
pub const BATTERY_BANDS: BandSpec = BandSpec::lower_is_worse(BATTERY_SAFE, BATTERY_WARNING, GREEN);

impl BandSpec {
    /// Bands for a metric that worsens as it rises. The limits are exclusive.
    pub const fn higher_is_worse(
        safe_limit: f32,
        danger_limit: f32,
        safe_color: Rgb888,
    ) -> Self {
        Self {
            safe_limit,
            danger_limit,
            direction: Direction::HigherIsWorse,
            safe_color,
        }
    }

    /// Bands for a metric that worsens as it falls. The limits are inclusive.
    pub const fn lower_is_worse(
        safe_limit: f32,
        danger_limit: f32,
        safe_color: Rgb888,
    ) -> Self {
        Self {
            safe_limit,
            danger_limit,
            direction: Direction::LowerIsWorse,
            safe_color,
        }
    }

    /// Band of `value`. NaN is `Unknown`.
    pub fn tone_of(
        &self,
        value: f32,
    ) -> Tone {
        if value.is_nan() {
            return Tone::Unknown;
        }
        match self.direction {
            Direction::HigherIsWorse => {
                if value > self.danger_limit {
                    Tone::Danger
                } else if value > self.safe_limit {
                    Tone::Caution
                } else {
                    Tone::Safe
                }
            }
            Direction::LowerIsWorse => {
                if value >= self.safe_limit {
                    Tone::Safe
                } else if value >= self.danger_limit {
                    Tone::Caution
                } else {
                    Tone::Danger
                }
            }
        }
    }

    /// Draw color of `value`: the safe color in the safe band, the tone
    /// color otherwise.
    pub fn color_of(
        &self,
        value: f32,
    ) -> Rgb888 {
        match self.tone_of(value) {
            Tone::Safe => self.safe_color,
            tone => tone.color(),
        }
    }
}
