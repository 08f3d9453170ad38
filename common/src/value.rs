//! Raw metric values and the cached [`Sample`] produced by a probe.

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::Rgb888;
use heapless::String;

use crate::colors::{ERROR_COLOR, GRAY};
use crate::tone::Tone;

/// Maximum characters of a rendered value segment.
pub const VALUE_TEXT_LEN: usize = 128;

/// Fixed-capacity text of a rendered value segment.
pub type ValueText = String<VALUE_TEXT_LEN>;

/// Build a [`ValueText`], truncating anything past the capacity.
pub fn value_text(text: &str) -> ValueText {
    let mut out = ValueText::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Format into a [`ValueText`], truncating at the capacity like [`value_text`].
pub fn format_value(args: fmt::Arguments<'_>) -> ValueText {
    let mut out = Truncating(ValueText::new());
    let _ = out.write_fmt(args);
    out.0
}

/// Writer that keeps every char that fits and silently drops the rest.
struct Truncating(ValueText);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Raw reading, tagged by kind.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum MetricValue {
    Numeric(f32),
    Text(std::string::String),
    #[default]
    Unknown,
}

impl MetricValue {
    /// No reading at all.
    pub const fn is_unknown(&self) -> bool { matches!(self, Self::Unknown) }

    /// The numeric reading, if this is one.
    pub const fn as_number(&self) -> Option<f32> {
        match self {
            Self::Numeric(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Unknown => f.write_str("UNK"),
        }
    }
}

/// One cached reading: raw value, display text, severity and draw color.
///
/// `color` is usually `tone.color()`, but gradient metrics carry a blended
/// color and some metrics use their own safe color.
#[derive(Clone, PartialEq, Debug)]
pub struct Sample {
    pub value: MetricValue,
    pub text: ValueText,
    pub tone: Tone,
    pub color: Rgb888,
}

impl Sample {
    /// Create a sample from its parts.
    pub const fn new(
        value: MetricValue,
        text: ValueText,
        tone: Tone,
        color: Rgb888,
    ) -> Self {
        Self {
            value,
            text,
            tone,
            color,
        }
    }

    /// A textual reading shown verbatim.
    pub fn text(
        text: &str,
        tone: Tone,
        color: Rgb888,
    ) -> Self {
        Self::new(MetricValue::Text(text.into()), value_text(text), tone, color)
    }

    /// A failed or missing reading, drawn in the error color.
    pub fn unknown(marker: &str) -> Self {
        Self::new(MetricValue::Unknown, value_text(marker), Tone::Unknown, ERROR_COLOR)
    }

    /// A reading this platform cannot provide, drawn in gray.
    pub fn unavailable(marker: &str) -> Self {
        Self::new(MetricValue::Unknown, value_text(marker), Tone::Unknown, GRAY)
    }

    /// Whether this sample stands in for a failed or missing reading.
    pub const fn is_unknown(&self) -> bool { matches!(self.tone, Tone::Unknown) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{GREEN, RED};

    #[test]
    fn test_value_text_truncates() {
        let long: std::string::String = "x".repeat(VALUE_TEXT_LEN + 20);
        assert_eq!(value_text(&long).len(), VALUE_TEXT_LEN);
        assert_eq!(value_text("65C").as_str(), "65C");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(format_args!("co:{}ppm", 12.0)).as_str(), "co:12ppm");
    }

    #[test]
    fn test_format_value_truncates_overlong_argument() {
        let icao = "X".repeat(VALUE_TEXT_LEN + 2);
        let text = format_value(format_args!("{}/{icao}", 11_259_375));
        assert_eq!(text.len(), VALUE_TEXT_LEN, "filled to capacity");
        assert!(text.starts_with("11259375/XXX"), "argument kept up to the limit: {text}");
        assert_eq!(text, value_text(&format!("11259375/{icao}")));
    }

    #[test]
    fn test_unknown_sample() {
        let s = Sample::unknown("UNKNOWN");
        assert_eq!(s.text.as_str(), "UNKNOWN");
        assert_eq!(s.tone, Tone::Unknown);
        assert_eq!(s.color, RED);
        assert!(s.value.is_unknown());
    }

    #[test]
    fn test_unavailable_sample_is_gray() {
        let s = Sample::unavailable("---");
        assert_eq!(s.color, GRAY);
        assert!(s.is_unknown());
    }

    #[test]
    fn test_metric_value_display() {
        assert_eq!(MetricValue::Numeric(80.0).to_string(), "80");
        assert_eq!(MetricValue::Numeric(80.5).to_string(), "80.5");
        assert_eq!(MetricValue::Text("CHG".into()).to_string(), "CHG");
        assert_eq!(MetricValue::Unknown.to_string(), "UNK");
    }

    #[test]
    fn test_text_sample_keeps_raw_value() {
        let s = Sample::text("10.0.0.2", Tone::Safe, GREEN);
        assert_eq!(s.value, MetricValue::Text("10.0.0.2".into()));
        assert_eq!(s.text.as_str(), "10.0.0.2");
    }
}
