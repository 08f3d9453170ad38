//! Severity classes and the worst-of aggregation rule.

use core::fmt;

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::{ERROR_COLOR, GREEN, NEUTRAL_COLOR, RED, YELLOW};

/// Severity class of a sample.
///
/// Variant order is the aggregation order: `Safe < Caution < Danger <
/// Unknown`. A reading that was expected but could not be taken outranks
/// every real reading.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Tone {
    #[default]
    Safe,
    Caution,
    Danger,
    Unknown,
}

impl Tone {
    /// Combined severity of two independent readings.
    #[inline]
    #[must_use]
    pub fn worst(
        self,
        other: Self,
    ) -> Self {
        self.max(other)
    }

    /// Worst tone over any number of readings. An empty set is `Safe`.
    pub fn worst_of<I>(tones: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        tones.into_iter().fold(Self::Safe, Self::worst)
    }

    /// Default color for a single reading in this tone.
    pub const fn color(self) -> Rgb888 {
        match self {
            Self::Safe => GREEN,
            Self::Caution => YELLOW,
            Self::Danger => RED,
            Self::Unknown => ERROR_COLOR,
        }
    }

    /// Color for an aggregated indicator.
    ///
    /// A nominal composite shows the neutral color rather than GREEN; a
    /// failed component raises the indicator to the danger color.
    pub const fn combined_color(self) -> Rgb888 {
        match self {
            Self::Safe => NEUTRAL_COLOR,
            Self::Caution => YELLOW,
            Self::Danger | Self::Unknown => RED,
        }
    }

    /// Upper-case name used in logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Caution => "CAUTION",
            Self::Danger => "DANGER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
