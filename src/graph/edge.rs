//! Candidate wall openings considered during generation.

use crate::core::Direction;

use super::union_find::DisjointSets;
use super::Grid;

/// A potential opening between two adjacent rooms.
///
/// `a` and `b` are flat node indices; `dir` points from `a` to `b`.
/// Candidates carry a random weight that decides their selection order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EdgeCandidate {
    pub a: usize,
    pub b: usize,
    pub dir: Direction,
    pub weight: i32,
}

impl EdgeCandidate {
    /// Whether the endpoints are already mutually reachable.
    pub fn connected(&self, sets: &mut DisjointSets) -> bool {
        sets.connected(self.a, self.b)
    }

    /// Merge the endpoints' connectivity classes.
    pub fn union(&self, sets: &mut DisjointSets) {
        sets.union(self.a, self.b);
    }

    /// Write the opening into both endpoint rooms.
    pub fn commit(&self, grid: &mut Grid) {
        grid.node_at_mut(self.a).connect(self.dir);
        grid.node_at_mut(self.b).connect(self.dir.opposite());
    }
}
