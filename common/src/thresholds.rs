//! Centralized diagnostic threshold configuration.
//!
//! All thresholds are compile-time constants with validation assertions, so
//! the color functions, the band classifiers and the presenter agree on where
//! each band starts. Misordered thresholds fail the build.

// =============================================================================
// CPU Temperature Thresholds (Celsius)
// =============================================================================

/// At or below this temperature the CPU reading is plain GREEN.
pub const NORMAL_TEMP: f32 = 50.0;

/// At or above this temperature the CPU reading is plain RED.
/// Between [`NORMAL_TEMP`] and this value the color blends GREEN -> RED.
pub const REDLINE_TEMP: f32 = 80.0;

const _: () = assert!(NORMAL_TEMP < REDLINE_TEMP);

// =============================================================================
// Carbon Monoxide Thresholds (PPM, higher is worse)
// =============================================================================

/// Readings above this level are CAUTION.
pub const CO_SAFE: f32 = 10.0;

/// Readings above this level are DANGER.
pub const CO_WARNING: f32 = 49.0;

const _: () = assert!(CO_SAFE < CO_WARNING);

// =============================================================================
// Sensor Battery Thresholds (percent, lower is worse)
// =============================================================================

/// At or above this charge the battery is SAFE.
pub const BATTERY_SAFE: f32 = 75.0;

/// At or above this charge (and below [`BATTERY_SAFE`]) the battery is CAUTION.
/// Anything lower is DANGER.
pub const BATTERY_WARNING: f32 = 25.0;

const _: () = assert!(BATTERY_WARNING < BATTERY_SAFE);

#[cfg(test)]
#[allow(clippy::assertions_on_constants)] // Mirrors the compile-time checks
mod tests {
    use super::*;

    #[test]
    fn test_cpu_threshold_ordering() {
        assert!(NORMAL_TEMP < REDLINE_TEMP);
    }

    #[test]
    fn test_co_threshold_ordering() {
        assert!(CO_SAFE < CO_WARNING);
    }

    #[test]
    fn test_battery_threshold_ordering() {
        assert!(BATTERY_WARNING < BATTERY_SAFE);
        assert!(BATTERY_SAFE <= 100.0, "battery thresholds are percentages");
    }
}
