//! Color constants for the HUD diagnostics panel.
//!
//! The HUD framebuffer is 24-bit, so everything here is `Rgb888`. The
//! standard colors come from the `RgbColor` trait constants so that the
//! endpoints of a gradient are exact channel extremes.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Background behind every text segment.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure red. Danger band, failed readings, disconnected sensor.
pub const RED: Rgb888 = Rgb888::RED;

/// Pure green. Safe band for address, CPU temperature and battery.
pub const GREEN: Rgb888 = Rgb888::GREEN;

/// Pure blue. Row labels, informational values, disabled features.
pub const BLUE: Rgb888 = Rgb888::BLUE;

/// Pure yellow. Caution band and the version string.
pub const YELLOW: Rgb888 = Rgb888::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Mid gray for readings the platform cannot provide (e.g. no thermal zone).
pub const GRAY: Rgb888 = Rgb888::new(128, 128, 128);

// =============================================================================
// Role Colors
// =============================================================================

/// Color of every row label. Fixed; never chosen per metric.
pub const LABEL_COLOR: Rgb888 = BLUE;

/// Color of informational values that carry no severity.
pub const NEUTRAL_COLOR: Rgb888 = BLUE;

/// Color of readings that were expected but are missing or failed.
pub const ERROR_COLOR: Rgb888 = RED;

// =============================================================================
// Color Interpolation
// =============================================================================

/// Channel-wise linear blend from `from` to `to`.
///
/// `proportion` is clamped to `0.0..=1.0` first (NaN counts as `0.0`), so the
/// result never leaves the box spanned by the two endpoints.
pub fn mix(
    from: Rgb888,
    to: Rgb888,
    proportion: f32,
) -> Rgb888 {
    let t = clamp01(proportion);

    let channel = |a: u8, b: u8| -> u8 {
        let a = f32::from(a);
        let b = f32::from(b);
        (b - a).mul_add(t, a).round().clamp(0.0, 255.0) as u8
    };

    Rgb888::new(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}

/// Clamp to the unit interval, mapping NaN to zero.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(GREEN, RED, 0.0), GREEN);
        assert_eq!(mix(GREEN, RED, 1.0), RED);
    }

    #[test]
    fn test_mix_midpoint_rounds_half_up() {
        // 127.5 on both moving channels
        assert_eq!(mix(GREEN, RED, 0.5), Rgb888::new(128, 128, 0));
    }

    #[test]
    fn test_mix_clamps_proportion() {
        assert_eq!(mix(GREEN, RED, -3.0), GREEN);
        assert_eq!(mix(GREEN, RED, 7.5), RED);
        assert_eq!(mix(GREEN, RED, f32::NAN), GREEN);
    }

    #[test]
    fn test_clamp01() {
        assert!((clamp01(0.25) - 0.25).abs() < f32::EPSILON);
        assert!(clamp01(-0.1).abs() < f32::EPSILON);
        assert!((clamp01(1.1) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_label_color_is_neutral_blue() {
        assert_eq!(LABEL_COLOR, BLUE);
        assert_ne!(ERROR_COLOR, NEUTRAL_COLOR, "error and neutral must differ");
    }
}
