//! Timing constants for the simulator.

use std::time::Duration;

/// Target frame time (~30 FPS). The main loop sleeps if the frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(33);

/// Simulated seconds advanced per frame for the scripted sensor.
pub const TIME_STEP: f32 = 0.05;
