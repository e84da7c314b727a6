//! Wall-clock frame timing

use std::time::Instant;

/// Measures the time between frames and since startup
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last: now,
        }
    }

    /// Time since the previous call (or since creation), in seconds
    pub fn elapsed_reset(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last);
        self.last = now;
        frame_time.as_secs_f32()
    }

    /// Seconds since the clock was created
    pub fn run_time(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_elapsed_reset_measures_each_frame() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let first = clock.elapsed_reset();
        assert!(first >= 0.005);

        let second = clock.elapsed_reset();
        assert!(second < first, "Second frame starts from the reset point");
        assert!(clock.run_time() >= first);
    }
}
