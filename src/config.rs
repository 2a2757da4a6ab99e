use std::time::Duration;

use thiserror::Error;

use crate::geometry::Board;

pub const DEFAULT_WIDTH: u16 = 17;
pub const DEFAULT_HEIGHT: u16 = 17;
pub const DEFAULT_TICK_MS: u64 = 180;

/// Rejected settings. Raised once, before the first tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: u16, height: u16 },

    #[error("a {width}x{height} board cannot hold the starting snake and its food")]
    TooSmall { width: i32, height: i32 },

    #[error("tick interval must be greater than zero")]
    ZeroInterval,
}

/// Settings fixed at process start; not reloadable mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the game grid
    pub width: u16,
    /// Height of the game grid
    pub height: u16,
    /// Time between two ticks
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Checks the interval and builds the board.
    pub fn board(&self) -> Result<Board, ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Board::new(self.width, self.height)
    }
}
