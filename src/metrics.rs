use std::time::{Duration, Instant};

/// Per-process play statistics, carried across the arcade reset cycle.
pub struct SessionStats {
    round_started: Instant,
    elapsed: Duration,
    pub best_score: u32,
    pub rounds_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            elapsed: Duration::ZERO,
            best_score: 0,
            rounds_played: 0,
        }
    }

    /// Refresh the round clock; called once per frame.
    pub fn update(&mut self) {
        self.elapsed = self.round_started.elapsed();
    }

    /// Record a finished round.
    pub fn record_round(&mut self, final_score: u32) {
        self.rounds_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    /// Restart the round clock, e.g. after a reset.
    pub fn reset_clock(&mut self) {
        self.round_started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    /// Round clock as mm:ss.
    pub fn clock(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
