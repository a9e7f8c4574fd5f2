//! # wumpus-engine
//!
//! A seeded maze-generation and turn-resolution engine for
//! hunt-the-wumpus style games.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every draw of randomness is seeded. The same
//!    [`MazeConfig`] always yields the same board, the same hazard deal,
//!    and the same bat rolls — replays and golden tests depend on it.
//!
//! 2. **The engine owns all mutation**: callers hold a [`Maze`] and issue
//!    commands; everything they read back is a detached snapshot or a
//!    plain value. There is no route to the live board from outside.
//!
//! 3. **Configuration over convention**: board shape, wrapping, wall
//!    budget, hazard densities, arrows, and player count all come from
//!    [`MazeConfig`] — nothing is hardcoded.
//!
//! ## Modules
//!
//! - `core`: positions, directions, room and effect enums, seeded RNG,
//!   players, configuration
//! - `graph`: nodes, candidate edges, union-find, the board grid
//! - `maze`: the generation pipeline and the runtime rule engine
//!
//! ## Example
//!
//! ```
//! use wumpus_engine::{Maze, MazeConfig};
//!
//! let maze = Maze::new(
//!     MazeConfig::builder()
//!         .rows(4)
//!         .cols(4)
//!         .goal(3, 3)
//!         .seed(42)
//!         .finish(),
//! )
//! .unwrap();
//!
//! assert!(!maze.is_game_over());
//! assert_eq!(maze.current_player(), 1);
//! assert!(!maze.possible_player_moves().is_empty());
//! ```

pub mod core;
pub mod error;
pub mod graph;
pub mod maze;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameRng, MazeBuilder, MazeConfig, Player, PlayerEffect, Position, RoomAttribute,
    RoomType,
};

pub use crate::error::{ConfigError, RuleError};

pub use crate::graph::NodeSnapshot;

pub use crate::maze::Maze;
