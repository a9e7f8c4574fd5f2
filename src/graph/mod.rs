//! The board: node storage plus the stepping and hallway-resolution
//! geometry shared by movement, arrow flight, and hint propagation.

mod edge;
pub mod node;
mod union_find;

pub use node::NodeSnapshot;

pub(crate) use edge::EdgeCandidate;
pub(crate) use node::Node;
pub(crate) use union_find::DisjointSets;

use crate::core::{Direction, Position, RoomType};

/// A rows x cols board of rooms, stored row-major.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let nodes = (0..rows * cols)
            .map(|i| Node::new(Position::new(i / cols, i % cols)))
            .collect();
        Self { rows, cols, nodes }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn index_of(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    pub fn node(&self, pos: Position) -> &Node {
        &self.nodes[self.index_of(pos)]
    }

    pub fn node_mut(&mut self, pos: Position) -> &mut Node {
        let index = self.index_of(pos);
        &mut self.nodes[index]
    }

    pub fn node_at(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn node_at_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// One step from `pos`, wrapping over the border.
    ///
    /// Wrap correction is unconditional: boards that do not wrap never
    /// open a border-crossing wall, so the wrapped cell is unreachable
    /// there anyway.
    pub fn step(&self, pos: Position, dir: Direction) -> Position {
        let (dr, dc) = dir.delta();
        let row = pos.row as isize + dr;
        let col = pos.col as isize + dc;
        let row = if row < 0 {
            self.rows - 1
        } else if row as usize >= self.rows {
            0
        } else {
            row as usize
        };
        let col = if col < 0 {
            self.cols - 1
        } else if col as usize >= self.cols {
            0
        } else {
            col as usize
        };
        Position::new(row, col)
    }

    /// The connection out of a hallway other than the one just used to
    /// enter it.
    pub fn hallway_exit(&self, hallway: Position, arrival: Direction) -> Direction {
        let back = arrival.opposite();
        for &dir in self.node(hallway).connections() {
            if dir != back {
                return dir;
            }
        }
        unreachable!("hallway {hallway} has no second opening")
    }

    /// Follow a connection out of `from`, passing straight through any
    /// hallways, until a non-hallway room is reached. Returns that room's
    /// position and the direction of the final approach.
    ///
    /// Terminates on every generated board: an all-hallway cycle would
    /// have to span the whole connected graph, which always carries the
    /// non-hallway start room.
    pub fn resolve_through_hallways(
        &self,
        from: Position,
        dir: Direction,
    ) -> (Position, Direction) {
        let mut pos = self.step(from, dir);
        let mut dir = dir;
        while self.node(pos).room_type() == RoomType::Hallway {
            dir = self.hallway_exit(pos, dir);
            pos = self.step(pos, dir);
        }
        (pos, dir)
    }
}
