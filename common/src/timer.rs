//! Frame-count refresh timers.
//!
//! Slow or expensive metrics are re-probed every N frames instead of every
//! frame. Each metric gets its own [`TimerState`] so metrics with different
//! cost and volatility never share a schedule.

// =============================================================================
// Refresh Periods (frames)
// =============================================================================

/// Frames between network address lookups. Addresses rarely change and the
/// lookup spawns a process.
pub const ADDRESS_REFRESH_FRAMES: u32 = 120;

/// Frames between CPU temperature reads.
pub const CPU_TEMP_REFRESH_FRAMES: u32 = 60;

/// Countdown to the next refresh of one metric.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimerState {
    countdown: i32,
    period: u32,
}

impl TimerState {
    /// A timer that fires after `period` ticks.
    pub const fn new(period: u32) -> Self {
        Self {
            countdown: clamp_period(period),
            period,
        }
    }

    /// Advance one frame. Returns `true` when the metric must refresh; the
    /// countdown is then already re-armed to `period`.
    pub const fn tick(&mut self) -> bool {
        self.countdown -= 1;
        if self.countdown <= 0 {
            self.countdown = clamp_period(self.period);
            true
        } else {
            false
        }
    }

    /// Re-arm to a full period without firing.
    pub const fn reset(&mut self) {
        self.countdown = clamp_period(self.period);
    }

    /// Ticks left before the next refresh.
    #[inline]
    pub const fn countdown(&self) -> i32 { self.countdown }

    /// Ticks between refreshes.
    #[inline]
    pub const fn period(&self) -> u32 { self.period }
}

const fn clamp_period(period: u32) -> i32 {
    if period > i32::MAX as u32 { i32::MAX } else { period as i32 }
}
