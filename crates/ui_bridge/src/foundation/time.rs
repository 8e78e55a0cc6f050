//! Time management utilities

use std::time::{Duration, Instant};

/// Frame timer producing the per-frame delta handed to `Bridge::update`
pub struct Timer {
    last_frame: Instant,
    delta: Duration,
    total: Duration,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            total: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Advance the timer (call once per frame) and return the elapsed time
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_frame);
        self.total += self.delta;
        self.last_frame = now;
        self.frame_count += 1;
        self.delta
    }

    /// Time between the last two ticks
    pub const fn delta(&self) -> Duration {
        self.delta
    }

    /// Total time accumulated over all ticks
    pub const fn total(&self) -> Duration {
        self.total
    }

    /// Number of ticks so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_accumulates() {
        let mut timer = Timer::new();
        let first = timer.tick();
        let second = timer.tick();
        assert_eq!(timer.frame_count(), 2);
        assert_eq!(timer.total(), first + second);
        assert_eq!(timer.delta(), second);
    }
}
