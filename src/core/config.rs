//! Maze configuration and its builder.
//!
//! A [`MazeConfig`] carries every construction parameter: board shape,
//! wall budget, hazard densities, seed, arrows, and player count. Mazes
//! keep their config around verbatim so a restart rebuilds the identical
//! board. Validation happens once, at maze construction.

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::error::ConfigError;

/// Immutable construction parameters for a maze.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Walls left standing after generation. Fewer remaining walls means
    /// more open edges and more cycles.
    pub walls_remaining: usize,
    /// Whether edges additionally connect opposite borders.
    pub wrapping: bool,
    pub start: Position,
    pub goal: Position,
    /// Requested share of rooms holding a superbat, in percent. An upper
    /// bound, not a guarantee; see the hazard-placement notes in
    /// `maze::generation`.
    pub bat_percent: u32,
    /// Requested share of rooms holding a pit, in percent.
    pub pit_percent: u32,
    pub seed: u64,
    /// Arrows each player starts with.
    pub arrow_count: u32,
    /// 1 or 2.
    pub player_count: u8,
}

impl MazeConfig {
    /// Start building a config from the default parameters.
    #[must_use]
    pub fn builder() -> MazeBuilder {
        MazeBuilder::new()
    }

    /// Total wall slots the board has before any are opened.
    #[must_use]
    pub fn total_walls(&self) -> usize {
        if self.wrapping {
            2 * self.rows * self.cols
        } else {
            self.cols * self.rows.saturating_sub(1) + self.rows * self.cols.saturating_sub(1)
        }
    }

    /// Open walls (committed edges) this maze will end up with.
    #[must_use]
    pub fn edges_needed(&self) -> usize {
        self.total_walls().saturating_sub(self.walls_remaining)
    }

    /// Check every construction rule, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 1 || self.cols < 1 || self.rows + self.cols == 2 {
            return Err(ConfigError::TooSmall);
        }
        for pos in [self.start, self.goal] {
            if pos.row >= self.rows || pos.col >= self.cols {
                return Err(ConfigError::OutOfBounds(pos));
            }
        }
        if self.start == self.goal {
            return Err(ConfigError::StartIsGoal);
        }
        for pct in [self.bat_percent, self.pit_percent] {
            if pct > 100 {
                return Err(ConfigError::BadPercentage(pct));
            }
        }
        if self.arrow_count < 1 {
            return Err(ConfigError::NoArrows);
        }
        if self.player_count == 0 || self.player_count > 2 {
            return Err(ConfigError::BadPlayerCount(self.player_count));
        }
        if self.edges_needed() < self.rows * self.cols - 1 {
            return Err(ConfigError::TooManyWalls);
        }
        Ok(())
    }
}

/// Builder for [`MazeConfig`] with the engine's default parameters:
/// a 3x3 non-wrapping board, start (0,0), goal (1,1), 20% bats, 10% pits,
/// 2 arrows, 1 player, seed 0, every wall opened.
#[derive(Clone, Debug)]
pub struct MazeBuilder {
    config: MazeConfig,
    perfect: bool,
}

impl MazeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: MazeConfig {
                rows: 3,
                cols: 3,
                walls_remaining: 0,
                wrapping: false,
                start: Position::new(0, 0),
                goal: Position::new(1, 1),
                bat_percent: 20,
                pit_percent: 10,
                seed: 0,
                arrow_count: 2,
                player_count: 1,
            },
            perfect: false,
        }
    }

    #[must_use]
    pub fn rows(mut self, rows: usize) -> Self {
        self.config.rows = rows;
        self
    }

    #[must_use]
    pub fn cols(mut self, cols: usize) -> Self {
        self.config.cols = cols;
        self
    }

    /// Leave this many walls standing. Overridden by [`perfect`].
    ///
    /// [`perfect`]: MazeBuilder::perfect
    #[must_use]
    pub fn walls_remaining(mut self, walls: usize) -> Self {
        self.config.walls_remaining = walls;
        self
    }

    /// Open exactly the spanning-tree edge count: a maze with no cycles.
    #[must_use]
    pub fn perfect(mut self) -> Self {
        self.perfect = true;
        self
    }

    #[must_use]
    pub fn wrapping(mut self, wrapping: bool) -> Self {
        self.config.wrapping = wrapping;
        self
    }

    #[must_use]
    pub fn start(mut self, row: usize, col: usize) -> Self {
        self.config.start = Position::new(row, col);
        self
    }

    #[must_use]
    pub fn goal(mut self, row: usize, col: usize) -> Self {
        self.config.goal = Position::new(row, col);
        self
    }

    #[must_use]
    pub fn bat_percent(mut self, percent: u32) -> Self {
        self.config.bat_percent = percent;
        self
    }

    #[must_use]
    pub fn pit_percent(mut self, percent: u32) -> Self {
        self.config.pit_percent = percent;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn arrow_count(mut self, arrows: u32) -> Self {
        self.config.arrow_count = arrows;
        self
    }

    #[must_use]
    pub fn player_count(mut self, players: u8) -> Self {
        self.config.player_count = players;
        self
    }

    /// Produce the config. Validation happens when the maze is built.
    #[must_use]
    pub fn finish(self) -> MazeConfig {
        let mut config = self.config;
        if self.perfect {
            let spanning = config.rows * config.cols - 1;
            config.walls_remaining = config.total_walls().saturating_sub(spanning);
        }
        config
    }
}

impl Default for MazeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
