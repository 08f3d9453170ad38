//! Continuous color gradients for metrics such as CPU temperature.

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::{GREEN, RED, clamp01, mix};
use crate::thresholds::{NORMAL_TEMP, REDLINE_TEMP};
use crate::tone::Tone;

/// Linear color interpolation between two named thresholds.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GradientSpec {
    pub safe_bound: f32,
    pub danger_bound: f32,
    pub safe_color: Rgb888,
    pub danger_color: Rgb888,
}

/// CPU temperature: GREEN up to 50C, RED from 80C.
pub const CPU_TEMP_GRADIENT: GradientSpec = GradientSpec::new(NORMAL_TEMP, REDLINE_TEMP, GREEN, RED);

impl GradientSpec {
    /// Gradient from `safe_color` at `safe_bound` to `danger_color` at `danger_bound`.
    pub const fn new(
        safe_bound: f32,
        danger_bound: f32,
        safe_color: Rgb888,
        danger_color: Rgb888,
    ) -> Self {
        Self {
            safe_bound,
            danger_bound,
            safe_color,
            danger_color,
        }
    }

    /// Position of `value` between the bounds, clamped to `0.0..=1.0`.
    pub fn proportion(
        &self,
        value: f32,
    ) -> f32 {
        let range = self.danger_bound - self.safe_bound;
        if range <= 0.0 {
            return if value >= self.danger_bound { 1.0 } else { 0.0 };
        }
        clamp01((value - self.safe_bound) / range)
    }

    /// Endpoint color at or beyond a bound, a rounded blend in between.
    pub fn color_at(
        &self,
        value: f32,
    ) -> Rgb888 {
        if value <= self.safe_bound {
            self.safe_color
        } else if value >= self.danger_bound {
            self.danger_color
        } else {
            mix(self.safe_color, self.danger_color, self.proportion(value))
        }
    }

    /// Severity of `value`: the blended stretch counts as caution.
    pub fn tone_at(
        &self,
        value: f32,
    ) -> Tone {
        if value.is_nan() {
            Tone::Unknown
        } else if value <= self.safe_bound {
            Tone::Safe
        } else if value >= self.danger_bound {
            Tone::Danger
        } else {
            Tone::Caution
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;
    use proptest::prelude::*;

    use super::*;

    fn distance_from(
        color: Rgb888,
        origin: Rgb888,
    ) -> [i32; 3] {
        [
            (i32::from(color.r()) - i32::from(origin.r())).abs(),
            (i32::from(color.g()) - i32::from(origin.g())).abs(),
            (i32::from(color.b()) - i32::from(origin.b())).abs(),
        ]
    }

    #[test]
    fn test_cpu_65c_is_exact_midpoint() {
        let g = GradientSpec::new(50.0, 80.0, GREEN, RED);
        assert!((g.proportion(65.0) - 0.5).abs() < f32::EPSILON);
        assert_eq!(g.color_at(65.0), Rgb888::new(128, 128, 0));
        assert_eq!(g.tone_at(65.0), Tone::Caution);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(CPU_TEMP_GRADIENT.color_at(NORMAL_TEMP), GREEN);
        assert_eq!(CPU_TEMP_GRADIENT.color_at(REDLINE_TEMP), RED);
        assert_eq!(CPU_TEMP_GRADIENT.tone_at(NORMAL_TEMP), Tone::Safe);
        assert_eq!(CPU_TEMP_GRADIENT.tone_at(REDLINE_TEMP), Tone::Danger);
    }

    #[test]
    fn test_proportion_is_clamped() {
        assert!(CPU_TEMP_GRADIENT.proportion(-40.0).abs() < f32::EPSILON);
        assert!((CPU_TEMP_GRADIENT.proportion(120.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_degenerate_range() {
        let g = GradientSpec::new(60.0, 60.0, GREEN, RED);
        assert_eq!(g.color_at(59.9), GREEN);
        assert_eq!(g.color_at(60.0), GREEN);
        assert_eq!(g.color_at(60.1), RED);
    }

    #[test]
    fn test_nan_is_unknown() {
        assert_eq!(CPU_TEMP_GRADIENT.tone_at(f32::NAN), Tone::Unknown);
    }

    proptest! {
        #[test]
        fn prop_below_safe_bound_is_safe_color(t in -100.0f32..=50.0) {
            prop_assert_eq!(CPU_TEMP_GRADIENT.color_at(t), GREEN);
        }

        #[test]
        fn prop_above_danger_bound_is_danger_color(t in 80.0f32..400.0) {
            prop_assert_eq!(CPU_TEMP_GRADIENT.color_at(t), RED);
        }

        #[test]
        fn prop_between_bounds_stays_inside_endpoints(t in 50.0f32..80.0) {
            let c = CPU_TEMP_GRADIENT.color_at(t);
            prop_assert_eq!(c.b(), 0);
            // GREEN -> RED trades green for red one-for-one, give or take rounding
            let sum = u16::from(c.r()) + u16::from(c.g());
            prop_assert!((254..=256).contains(&sum), "r + g = {}", sum);
        }

        #[test]
        fn prop_well_inside_differs_from_both_endpoints(t in 51.0f32..79.0) {
            let c = CPU_TEMP_GRADIENT.color_at(t);
            prop_assert_ne!(c, GREEN);
            prop_assert_ne!(c, RED);
        }

        #[test]
        fn prop_channels_move_monotonically(a in 40.0f32..90.0, b in 40.0f32..90.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let near = distance_from(CPU_TEMP_GRADIENT.color_at(lo), GREEN);
            let far = distance_from(CPU_TEMP_GRADIENT.color_at(hi), GREEN);
            for ch in 0..3 {
                prop_assert!(near[ch] <= far[ch], "channel {} regressed: {:?} vs {:?}", ch, near, far);
            }
        }

        #[test]
        fn prop_color_at_is_pure(t in -50.0f32..150.0) {
            prop_assert_eq!(CPU_TEMP_GRADIENT.color_at(t), CPU_TEMP_GRADIENT.color_at(t));
            prop_assert_eq!(CPU_TEMP_GRADIENT.tone_at(t), CPU_TEMP_GRADIENT.tone_at(t));
        }
    }
}
