//! Core value types: positions, rooms, players, RNG, configuration.
//!
//! These are the leaf building blocks the rest of the engine is made of.

pub mod config;
pub mod player;
pub mod position;
pub mod rng;
pub mod room;

pub use config::{MazeBuilder, MazeConfig};
pub use player::Player;
pub use position::{Direction, Position};
pub use rng::{hazard_shuffle_seed, teleport_roll_seed, GameRng, EDGE_WEIGHT_RANGE};
pub use room::{PlayerEffect, RoomAttribute, RoomType};
