//! The maze orchestrator: owns the board, the players, and the turn
//! state, and exposes the whole playable surface.
//!
//! Everything mutable lives behind this type. Callers receive detached
//! [`NodeSnapshot`] copies and plain values; there is no way to reach the
//! live board from outside.

mod generation;
mod rules;

use crate::core::{Direction, MazeConfig, Player, PlayerEffect, Position};
use crate::error::ConfigError;
use crate::graph::{EdgeCandidate, Grid, NodeSnapshot};

/// A generated maze and its running game.
///
/// Built deterministically from a [`MazeConfig`]: the same config always
/// produces the same board, hazards, and bat rolls.
#[derive(Clone, Debug)]
pub struct Maze {
    config: MazeConfig,
    grid: Grid,
    edges: Vec<EdgeCandidate>,
    players: Vec<Player>,
    /// 1-based number of the player whose turn it is.
    turn: usize,
}

impl Maze {
    /// Validate the config and build the maze.
    pub fn new(config: MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Build from a config that is known to be valid.
    fn build(config: MazeConfig) -> Self {
        let (mut grid, edges) = generation::build_board(&config);

        let players: Vec<Player> = (1..=config.player_count)
            .map(|number| Player::new(config.start, config.arrow_count, number))
            .collect();
        for player in &players {
            grid.node_mut(config.start)
                .set_player_marker(player.number(), true);
        }

        Self {
            config,
            grid,
            edges,
            players,
            turn: 1,
        }
    }

    /// The stored construction parameters.
    #[must_use]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// A fresh maze built from the stored parameters. Same seed, same
    /// board, players back at the start.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::build(self.config.clone())
    }

    /// Directions the current player can walk, in the order the openings
    /// were committed.
    #[must_use]
    pub fn possible_player_moves(&self) -> Vec<Direction> {
        self.grid
            .node(self.current().position())
            .connections()
            .to_vec()
    }

    /// Where the current player stands.
    #[must_use]
    pub fn player_location(&self) -> Position {
        self.current().position()
    }

    /// 1-based number of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> usize {
        self.turn
    }

    /// Arrows left for the current player.
    #[must_use]
    pub fn arrow_count(&self) -> u32 {
        self.current().arrows()
    }

    /// Every player's most recent effects, in player order.
    #[must_use]
    pub fn recent_effects(&self) -> Vec<Vec<PlayerEffect>> {
        self.players
            .iter()
            .map(|player| player.effects().to_vec())
            .collect()
    }

    /// A detached copy of the whole board, row by row.
    #[must_use]
    pub fn nodes(&self) -> Vec<Vec<NodeSnapshot>> {
        (0..self.config.rows)
            .map(|row| {
                (0..self.config.cols)
                    .map(|col| self.grid.node(Position::new(row, col)).snapshot())
                    .collect()
            })
            .collect()
    }

    /// Number of committed edges (opened walls).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True once any player shot the wumpus or every player is out of
    /// the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let mut everyone_done = true;
        for player in &self.players {
            if player.effects().contains(&PlayerEffect::ShotWumpus) {
                return true;
            }
            everyone_done = everyone_done && player.is_terminal();
        }
        everyone_done
    }

    /// Debug rendering: one glyph per room plus East/South edge markers.
    /// Stable across identical builds, which makes it a convenient
    /// equality oracle in tests.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                let snap = self.grid.node(Position::new(row, col)).snapshot();
                out.push(snap.glyph());
                out.push(snap.east_glyph());
            }
            out.push('\n');
            for col in 0..self.config.cols {
                let snap = self.grid.node(Position::new(row, col)).snapshot();
                out.push(snap.south_glyph());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    fn current(&self) -> &Player {
        &self.players[self.turn - 1]
    }

    fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.turn - 1]
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
