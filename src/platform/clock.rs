use std::{
    thread,
    time::{Duration, Instant},
};

use super::Clock;

/// Wall-clock time since construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now_millis(&mut self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_millis(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}
