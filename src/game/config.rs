use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Game-rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per side of the square grid.
    pub cell_count: i32,
    /// Milliseconds between logic ticks.
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_count: 20,
            tick_ms: 100,
        }
    }
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Small grid, handy in tests that force border collisions quickly.
    pub fn small() -> Self {
        Self {
            cell_count: 12,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_arcade_rules() {
        let config = GameConfig::default();
        assert_eq!(config.cell_count, 20);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn small_grid_keeps_tick_rate() {
        let config = GameConfig::small();
        assert_eq!(config.cell_count, 12);
        assert_eq!(config.tick_ms, 100);
    }
}
