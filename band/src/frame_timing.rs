//! Frame timing.
//!
//! [`FrameClock`] measures the interval between frames and keeps a smoothed
//! frames-per-second estimate for the FPS indicator. [`measure`] times a
//! block and reports it through `tracing` at trace level.

use std::time::{Duration, Instant};

/// Weight of the newest sample in the smoothed frame interval.
const SMOOTHING: f64 = 0.1;

/// Tracks frame-to-frame intervals.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    /// Smoothed frame interval in seconds.
    interval: Option<f64>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Mark the start of a frame at an explicit instant.
    pub fn tick_at(&mut self, now: Instant) {
        if let Some(last) = self.last {
            let sample = now.saturating_duration_since(last).as_secs_f64();
            self.interval = Some(match self.interval {
                Some(smoothed) => smoothed + (sample - smoothed) * SMOOTHING,
                None => sample,
            });
        }
        self.last = Some(now);
        self.frames += 1;
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Smoothed frames per second, zero until two frames have been seen.
    pub fn fps(&self) -> f64 {
        match self.interval {
            Some(interval) if interval > 0.0 => 1.0 / interval,
            _ => 0.0,
        }
    }

    /// Smoothed frame interval.
    pub fn interval(&self) -> Option<Duration> {
        self.interval.map(Duration::from_secs_f64)
    }
}

/// Measure a block and report its duration at trace level. Returns the
/// block's result.
#[inline]
pub fn measure<T>(label: &'static str, frame: u64, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    tracing::trace!(frame, elapsed = ?start.elapsed(), "{}", label);
    result
}
