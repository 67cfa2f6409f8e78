use std::f32::consts::TAU;

/// Seconds for the marker to sweep there and back
pub const DEFAULT_DURATION: f32 = 4.0;

/// Curve parameter oscillating in [0, 1] with period `duration`
pub fn oscillate(elapsed: f32, duration: f32) -> f32 {
    ((TAU * elapsed / duration).sin() + 1.0) / 2.0
}

/// Animation driver for the marker riding along the curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    duration: f32,
}

impl Oscillator {
    /// Create an oscillator; non-positive durations fall back to the default
    pub fn new(duration: f32) -> Self {
        let duration = if duration > 0.0 { duration } else { DEFAULT_DURATION };
        Self { duration }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Parameter `t` for the given elapsed seconds
    pub fn parameter(&self, elapsed: f32) -> f32 {
        oscillate(elapsed, self.duration)
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}
