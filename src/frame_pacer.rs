//! Fixed-rate frame pacing
//!
//! Times are seconds from any monotonic clock (macroquad's `get_time`).

use std::time::Duration;

pub struct FramePacer {
    target: f64,
    start_time: f64,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(crate::consts::FPS)
    }
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            target: 1.0 / fps.max(1) as f64,
            start_time: 0.0,
        }
    }

    pub fn start(&mut self, now: f64) {
        self.start_time = now;
    }

    /// Close the frame and return how long to wait before the next one.
    pub fn end(&mut self, now: f64) -> Duration {
        let elapsed = (now - self.start_time).max(0.0);
        Duration::from_secs_f64((self.target - elapsed).max(0.0))
    }
}
