//! On-screen event log and render timing.
//!
//! `DebugLog` keeps the last few panel events, such as sensor toggles and
//! forced refreshes, for the debug overlay. `TaskTimer` tracks how
//! long one recurring task takes, with min/max and a smoothed average.
//!
//! ```ignore
//! let mut timer = TaskTimer::new("panel");
//! timer.start();
//! panel.draw(&mut display, &rows);
//! timer.stop();
//! println!("{}us avg", timer.avg_us());
//! ```

use std::time::{Duration, Instant};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer of recent panel events. Oldest lines drop off when full.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    /// Create a new empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a message, truncated to fit a line.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Number of stored lines.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Whether no line has been pushed yet.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Task Timer
// =============================================================================

/// Timing statistics for one recurring task.
pub struct TaskTimer {
    name: &'static str,
    started: Option<Instant>,
    pub last_us: u32,
    min_us: u32,
    pub max_us: u32,
    avg_us: f32,
    pub runs: u64,
}

impl TaskTimer {
    const EMA_ALPHA: f32 = 0.1;

    /// Create a timer with no runs recorded.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            started: None,
            last_us: 0,
            min_us: u32::MAX,
            max_us: 0,
            avg_us: 0.0,
            runs: 0,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str { self.name }

    /// Begin a measurement.
    pub fn start(&mut self) { self.started = Some(Instant::now()); }

    /// Stop the running measurement and record it. No-op if not started.
    pub fn stop(&mut self) -> Option<Duration> {
        let elapsed = self.started.take()?.elapsed();
        self.record(elapsed);
        Some(elapsed)
    }

    /// Fold one measured run into the statistics.
    pub fn record(
        &mut self,
        elapsed: Duration,
    ) {
        let us = u32::try_from(elapsed.as_micros()).unwrap_or(u32::MAX);

        self.last_us = us;
        self.min_us = self.min_us.min(us);
        self.max_us = self.max_us.max(us);

        if self.runs == 0 {
            self.avg_us = us as f32;
        } else {
            self.avg_us = Self::EMA_ALPHA.mul_add(us as f32, (1.0 - Self::EMA_ALPHA) * self.avg_us);
        }

        self.runs += 1;
    }

    /// Smoothed average in microseconds.
    #[inline]
    pub fn avg_us(&self) -> u32 { self.avg_us.round() as u32 }

    /// Minimum so far, or 0 before the first run.
    #[inline]
    pub const fn min_us(&self) -> u32 { if self.runs == 0 { 0 } else { self.min_us } }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push("sensor attached");
        log.push("refresh forced");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().collect::<Vec<_>>(), ["sensor attached", "refresh forced"]);
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();
        for i in 0..=LOG_BUFFER_SIZE {
            log.push(&format!("event {i}"));
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("event 1"), "oldest line dropped");
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        log.push(&"x".repeat(LOG_LINE_LENGTH * 2));
        assert_eq!(log.iter().next().map(str::len), Some(LOG_LINE_LENGTH));
    }

    #[test]
    fn test_task_timer_stats() {
        let mut timer = TaskTimer::new("panel");
        assert_eq!(timer.min_us(), 0, "no runs yet");

        timer.record(Duration::from_micros(1000));
        assert_eq!(timer.avg_us(), 1000, "first sample seeds the average");

        timer.record(Duration::from_micros(2000));
        assert_eq!(timer.last_us, 2000);
        assert_eq!(timer.min_us(), 1000);
        assert_eq!(timer.max_us, 2000);
        // 0.1 * 2000 + 0.9 * 1000
        assert_eq!(timer.avg_us(), 1100);
        assert_eq!(timer.runs, 2);
    }

    #[test]
    fn test_task_timer_stop_without_start() {
        let mut timer = TaskTimer::new("panel");
        assert!(timer.stop().is_none());
        assert_eq!(timer.runs, 0);

        timer.start();
        assert!(timer.stop().is_some());
        assert_eq!(timer.runs, 1);
        assert_eq!(timer.name(), "panel");
    }
}
