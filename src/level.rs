//! Level layout configuration
//!
//! Fixed for one session: the store is sized from these counts before the
//! first frame and never resized.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_COLS, MAX_ROWS, MAX_WALLS};
use crate::error::ConfigError;

/// Grid and wall counts for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Invader grid rows
    pub rows: usize,
    /// Invader grid columns
    pub cols: usize,
    /// Invaders placed row-major into the grid
    pub invaders: usize,
    /// Destructible walls between the ship and the swarm
    pub walls: usize,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 10,
            invaders: 50,
            walls: 3,
        }
    }
}

impl LevelConfig {
    /// Parse and validate a level from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let level: Self = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Check the level fits the fixed sprite capacity
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.invaders == 0 {
            return Err(ConfigError::NoInvaders);
        }
        if self.rows > MAX_ROWS {
            return Err(ConfigError::TooManyRows {
                rows: self.rows,
                max: MAX_ROWS,
            });
        }
        if self.cols > MAX_COLS {
            return Err(ConfigError::TooManyColumns {
                cols: self.cols,
                max: MAX_COLS,
            });
        }
        let cells = self.rows * self.cols;
        if self.invaders > cells {
            return Err(ConfigError::TooManyInvaders {
                invaders: self.invaders,
                cells,
            });
        }
        if self.walls > MAX_WALLS {
            return Err(ConfigError::TooManyWalls {
                walls: self.walls,
                max: MAX_WALLS,
            });
        }
        Ok(())
    }

    /// Grid cell (row, col) of the i-th invader
    pub fn grid_cell(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}
