//! Rooms of the maze board.
//!
//! [`Node`] is the live, mutable cell the maze operates on; nothing
//! outside the engine ever sees one. [`NodeSnapshot`] is the frozen copy
//! handed to callers: same data, no shared state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, Position, RoomAttribute, RoomType};

/// One mutable cell of the board.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    position: Position,
    connections: SmallVec<[Direction; 4]>,
    room_type: RoomType,
    visited: bool,
    attributes: Vec<RoomAttribute>,
}

impl Node {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            connections: SmallVec::new(),
            room_type: RoomType::Empty,
            visited: false,
            attributes: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Connected directions, in the order the openings were committed.
    pub fn connections(&self) -> &[Direction] {
        &self.connections
    }

    pub fn is_connected(&self, dir: Direction) -> bool {
        self.connections.contains(&dir)
    }

    /// Open a wall. Each direction can be opened at most once.
    pub fn connect(&mut self, dir: Direction) {
        assert!(
            !self.is_connected(dir),
            "room {} is already open to the {dir}",
            self.position
        );
        self.connections.push(dir);
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn set_room_type(&mut self, room_type: RoomType) {
        self.room_type = room_type;
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn visit(&mut self) {
        self.visited = true;
    }

    pub fn attributes(&self) -> &[RoomAttribute] {
        &self.attributes
    }

    /// Attach a hint attribute. Repeated adds are no-ops.
    pub fn add_attribute(&mut self, attr: RoomAttribute) {
        if !self.attributes.contains(&attr) {
            self.attributes.push(attr);
        }
    }

    /// Add or remove the presence marker for a player number.
    pub fn set_player_marker(&mut self, number: u8, present: bool) {
        let marker = RoomAttribute::HasPlayer(number);
        if present {
            self.add_attribute(marker);
        } else {
            self.attributes.retain(|&a| a != marker);
        }
    }

    /// A detached copy for external consumers.
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot {
            position: self.position,
            connections: self.connections.to_vec(),
            room_type: self.room_type,
            visited: self.visited,
            attributes: self.attributes.clone(),
        }
    }
}

/// Glyph for the one-character-per-room debug rendering: any player
/// marker wins, otherwise the room type decides.
pub(crate) fn room_glyph(room_type: RoomType, attributes: &[RoomAttribute]) -> char {
    if attributes.iter().any(|a| a.is_player_marker()) {
        return 'P';
    }
    match room_type {
        RoomType::Wumpus => 'G',
        RoomType::Start => 'S',
        RoomType::Pit => 'U',
        RoomType::Superbat => 'B',
        RoomType::SuperbatAndPit => '#',
        RoomType::Hallway => '+',
        RoomType::Empty => '0',
    }
}

/// A frozen copy of a room, safe to hand outside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub position: Position,
    /// Connected directions, in the order the openings were committed.
    pub connections: Vec<Direction>,
    pub room_type: RoomType,
    pub visited: bool,
    /// Hints and player markers, in insertion order.
    pub attributes: Vec<RoomAttribute>,
}

impl NodeSnapshot {
    #[must_use]
    pub fn is_connected(&self, dir: Direction) -> bool {
        self.connections.contains(&dir)
    }

    /// Room glyph for the debug rendering.
    #[must_use]
    pub fn glyph(&self) -> char {
        room_glyph(self.room_type, &self.attributes)
    }

    /// `-` when this room opens to the East, space otherwise.
    #[must_use]
    pub fn east_glyph(&self) -> char {
        if self.is_connected(Direction::East) {
            '-'
        } else {
            ' '
        }
    }

    /// `|` when this room opens to the South, space otherwise.
    #[must_use]
    pub fn south_glyph(&self) -> char {
        if self.is_connected(Direction::South) {
            '|'
        } else {
            ' '
        }
    }
}
