use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::state::Controller;

/// Configuration for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Initial length of each snake
    pub initial_snake_length: usize,
    /// Milliseconds between simulation ticks
    pub tick_ms: u64,
    /// Who drives each snake, in the order they advance each tick
    pub players: Vec<Controller>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::solo()
    }
}

impl GameConfig {
    /// A single human-driven snake on a small board
    pub fn solo() -> Self {
        Self {
            grid_size: 10,
            initial_snake_length: 3,
            tick_ms: 200,
            players: vec![Controller::Human],
        }
    }

    /// The heuristic agent against a human on a larger board. The agent
    /// advances first each tick.
    pub fn versus() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 3,
            tick_ms: 200,
            players: vec![Controller::Agent, Controller::Human],
        }
    }

    /// A single agent-driven snake to spectate
    pub fn watch() -> Self {
        Self {
            grid_size: 10,
            initial_snake_length: 3,
            tick_ms: 200,
            players: vec![Controller::Agent],
        }
    }

    /// Override the board size, keeping the rest of the preset
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Time between simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solo_preset() {
        let config = GameConfig::solo();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.players, vec![Controller::Human]);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_versus_preset_runs_agent_first() {
        let config = GameConfig::versus();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.players, vec![Controller::Agent, Controller::Human]);
    }

    #[test]
    fn test_watch_preset() {
        let config = GameConfig::watch();
        assert_eq!(config.players, vec![Controller::Agent]);
    }

    #[test]
    fn test_grid_size_override() {
        let config = GameConfig::versus().with_grid_size(30);
        assert_eq!(config.grid_size, 30);
        assert_eq!(config.players.len(), 2);
    }
}
