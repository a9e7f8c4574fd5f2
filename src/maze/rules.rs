//! The runtime rule engine: movement, arrow flight, bat teleports, and
//! turn advancement.
//!
//! Hallways are transparent everywhere: a single move or arrow command
//! carries through any number of corridor bends before it resolves. The
//! traversals are plain loops carrying (position, direction), so deep
//! corridors cost no stack.

use crate::core::{teleport_roll_seed, Direction, GameRng, PlayerEffect, Position, RoomType};
use crate::error::RuleError;

use super::Maze;

impl Maze {
    /// Walk the current player one move in `direction`, resolving every
    /// room effect on the way, then advance the turn.
    ///
    /// Fails with [`RuleError::GameOver`] when the mover is already out,
    /// and [`RuleError::IllegalMove`] when the direction has no opening.
    pub fn move_player(&mut self, direction: Direction) -> Result<(), RuleError> {
        self.move_current(direction)?;
        self.advance_turn();
        Ok(())
    }

    /// Move the current player toward `position`, which must be the
    /// effective destination (hallways skipped through) of one of their
    /// openings.
    ///
    /// Fails with [`RuleError::UnreachablePosition`] when no opening
    /// leads there in a single move.
    pub fn move_player_to(&mut self, position: Position) -> Result<(), RuleError> {
        let direction = self
            .direction_to(position)
            .ok_or(RuleError::UnreachablePosition)?;
        self.move_player(direction)
    }

    /// Shoot one arrow, then advance the turn. The arrow is spent whether
    /// or not it hits.
    ///
    /// Fails with [`RuleError::GameOver`] once the game has ended,
    /// [`RuleError::OutOfArrows`] when the shooter's quiver is empty, and
    /// [`RuleError::IllegalArrowDistance`] for a zero distance.
    pub fn fire_arrow(&mut self, direction: Direction, distance: u32) -> Result<(), RuleError> {
        if self.is_game_over() {
            return Err(RuleError::GameOver);
        }
        if self.current().effects().contains(&PlayerEffect::NoArrows) {
            return Err(RuleError::OutOfArrows);
        }
        if distance < 1 {
            return Err(RuleError::IllegalArrowDistance);
        }

        self.current_mut().clear_effects();
        self.current_mut().take_arrow();

        if self.arrow_hits(direction, distance, self.current().position()) {
            self.current_mut().add_effect(PlayerEffect::ShotWumpus);
        } else {
            self.current_mut().add_effect(PlayerEffect::MissedWumpus);
            if self.current().arrows() == 0 {
                self.current_mut().add_effect(PlayerEffect::NoArrows);
            }
        }

        self.advance_turn();
        Ok(())
    }

    /// Validate and perform one move for the current player, without
    /// touching the turn counter.
    fn move_current(&mut self, direction: Direction) -> Result<(), RuleError> {
        if self.current().is_terminal() {
            return Err(RuleError::GameOver);
        }
        if !self.possible_player_moves().contains(&direction) {
            return Err(RuleError::IllegalMove);
        }

        let number = self.current().number();
        self.current_mut().clear_effects();
        let from = self.current().position();
        self.grid.node_mut(from).set_player_marker(number, false);

        self.walk(direction);

        let to = self.current().position();
        self.grid.node_mut(to).set_player_marker(number, true);
        Ok(())
    }

    /// Carry the mover through the opening and any hallways behind it,
    /// then resolve the entry effect of the room they end up in.
    fn walk(&mut self, direction: Direction) {
        let mut dir = direction;
        loop {
            let pos = self.grid.step(self.current().position(), dir);
            self.current_mut().set_position(pos);

            let room = self.grid.node(pos).room_type();
            if room == RoomType::Hallway {
                self.grid.node_mut(pos).visit();
                dir = self.grid.hallway_exit(pos, dir);
                continue;
            }
            // Revisited rooms are quiet; the wumpus never is.
            if self.grid.node(pos).visited() && room != RoomType::Wumpus {
                return;
            }
            self.grid.node_mut(pos).visit();
            self.resolve_entry(room, pos);
            return;
        }
    }

    /// Apply the entry effect of a non-hallway room.
    fn resolve_entry(&mut self, room: RoomType, pos: Position) {
        match room {
            RoomType::Wumpus => self.current_mut().add_effect(PlayerEffect::RanIntoWumpus),
            RoomType::Pit => self.current_mut().add_effect(PlayerEffect::FellIntoPit),
            RoomType::Superbat => {
                if self.teleport(pos) {
                    self.current_mut().add_effect(PlayerEffect::GrabbedByBat);
                } else {
                    self.current_mut().add_effect(PlayerEffect::AvoidedBat);
                }
            }
            RoomType::SuperbatAndPit => {
                if self.teleport(pos) {
                    self.current_mut().add_effect(PlayerEffect::GrabbedByBat);
                } else {
                    self.current_mut().add_effect(PlayerEffect::FellIntoPit);
                }
            }
            RoomType::Start | RoomType::Empty | RoomType::Hallway => {}
        }
    }

    /// Roll the bat. On an odd coin the player is carried to a uniformly
    /// drawn room that holds no bat and is no hallway, and that room's
    /// entry effect resolves before the grab is recorded.
    ///
    /// Returns whether the player was carried off.
    fn teleport(&mut self, from: Position) -> bool {
        let mut rng = GameRng::new(teleport_roll_seed(self.config.seed, from));
        if rng.coin() == 0 {
            return false;
        }
        loop {
            let row = rng.index(self.config.rows);
            let col = rng.index(self.config.cols);
            let dest = Position::new(row, col);
            let room = self.grid.node(dest).room_type();
            if matches!(
                room,
                RoomType::Superbat | RoomType::SuperbatAndPit | RoomType::Hallway
            ) {
                continue;
            }

            self.current_mut().set_position(dest);
            // The destination can still be deadly: an unvisited pit or the
            // wumpus resolves exactly as if walked into.
            if !self.grid.node(dest).visited() || room == RoomType::Wumpus {
                self.grid.node_mut(dest).visit();
                match room {
                    RoomType::Wumpus => {
                        self.current_mut().add_effect(PlayerEffect::RanIntoWumpus);
                    }
                    RoomType::Pit => {
                        self.current_mut().add_effect(PlayerEffect::FellIntoPit);
                    }
                    _ => {}
                }
            }
            return true;
        }
    }

    /// Trace an arrow's flight. Hallways bend the path without costing
    /// range; every other room costs one unit.
    fn arrow_hits(&self, direction: Direction, distance: u32, from: Position) -> bool {
        let mut pos = from;
        let mut dir = direction;
        let mut left = distance;
        loop {
            if left == 0 {
                return self.grid.node(pos).room_type() == RoomType::Wumpus;
            }
            if !self.grid.node(pos).is_connected(dir) {
                return false;
            }
            pos = self.grid.step(pos, dir);
            if self.grid.node(pos).room_type() == RoomType::Hallway {
                dir = self.grid.hallway_exit(pos, dir);
            } else {
                left -= 1;
            }
        }
    }

    /// The last possible move whose hallway-resolved destination equals
    /// `position`.
    fn direction_to(&self, position: Position) -> Option<Direction> {
        let from = self.current().position();
        let mut found = None;
        for dir in self.possible_player_moves() {
            let (dest, _) = self.grid.resolve_through_hallways(from, dir);
            if dest == position {
                found = Some(dir);
            }
        }
        found
    }

    /// Hand the turn to the next player still in the game. Does nothing
    /// once the game is over.
    fn advance_turn(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.turn = if self.turn < self.players.len() {
            self.turn + 1
        } else {
            1
        };
        if self.current().is_terminal() {
            self.advance_turn();
        }
    }
}
