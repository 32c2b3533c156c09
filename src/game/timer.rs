use std::time::{Duration, Instant};

/// Interval gate that throttles the logic tick independently of the frame
/// rate.
///
/// The gate owns its last-trigger timestamp. `elapsed` returns true and
/// re-arms exactly when the interval has passed since the last trigger;
/// otherwise it leaves the stored timestamp untouched.
#[derive(Debug)]
pub struct TickGate {
    last_trigger: Instant,
}

impl TickGate {
    pub fn new() -> Self {
        Self {
            last_trigger: Instant::now(),
        }
    }

    pub fn elapsed(&mut self, interval: Duration) -> bool {
        self.elapsed_at(Instant::now(), interval)
    }

    fn elapsed_at(&mut self, now: Instant, interval: Duration) -> bool {
        if now.duration_since(self.last_trigger) >= interval {
            self.last_trigger = now;
            true
        } else {
            false
        }
    }
}

impl Default for TickGate {
    fn default() -> Self {
        Self::new()
    }
}
