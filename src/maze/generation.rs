//! Board construction: candidate edges, spanning selection, room typing,
//! and hint propagation.
//!
//! ## Pipeline
//!
//! 1. Lay out the empty node grid.
//! 2. Enumerate every potential wall opening with a seeded random weight
//!    and stably sort by weight. The enumeration order is the tie-break
//!    for equal weights, so it is part of the deterministic contract:
//!    South edges row-major, then East edges row-major, then (wrapping
//!    boards only) bottom-to-top wrap edges by column and right-to-left
//!    wrap edges by row.
//! 3. Walk the sorted list, committing edges that join two connectivity
//!    classes until a spanning tree exists, then pull extra edges from
//!    the discard pile in discard order until the requested open-wall
//!    count is met.
//! 4. Mark start and goal, promote degree-2 empty rooms to hallways, and
//!    deal out hazards from per-type seeded shuffles.
//! 5. Stamp adjacency hints onto each hazard's effective neighbors.

use crate::core::{
    hazard_shuffle_seed, Direction, GameRng, MazeConfig, Position, RoomAttribute, RoomType,
};
use crate::graph::{DisjointSets, EdgeCandidate, Grid};

/// Build the full board for a validated config. Returns the grid and the
/// committed edge list in commit order.
pub(crate) fn build_board(config: &MazeConfig) -> (Grid, Vec<EdgeCandidate>) {
    let mut grid = Grid::new(config.rows, config.cols);

    let candidates = candidate_edges(&grid, config.wrapping, config.seed);
    let edges = select_edges(candidates, grid.len(), config.edges_needed());
    for edge in &edges {
        edge.commit(&mut grid);
    }

    grid.node_mut(config.start).set_room_type(RoomType::Start);
    grid.node_mut(config.start).visit();
    grid.node_mut(config.goal).set_room_type(RoomType::Wumpus);

    promote_hallways(&mut grid);

    place_hazards(&mut grid, RoomType::Superbat, config.bat_percent, config.seed);
    place_hazards(&mut grid, RoomType::Pit, config.pit_percent, config.seed);

    propagate_hints(&mut grid);

    (grid, edges)
}

/// Every potential wall opening, weighted from a single seeded stream and
/// stably sorted by weight.
fn candidate_edges(grid: &Grid, wrapping: bool, seed: u64) -> Vec<EdgeCandidate> {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut rng = GameRng::new(seed);
    let mut list = Vec::new();

    for row in 0..rows.saturating_sub(1) {
        for col in 0..cols {
            list.push(EdgeCandidate {
                a: grid.index_of(Position::new(row, col)),
                b: grid.index_of(Position::new(row + 1, col)),
                dir: Direction::South,
                weight: rng.next_weight(),
            });
        }
    }
    for row in 0..rows {
        for col in 0..cols.saturating_sub(1) {
            list.push(EdgeCandidate {
                a: grid.index_of(Position::new(row, col)),
                b: grid.index_of(Position::new(row, col + 1)),
                dir: Direction::East,
                weight: rng.next_weight(),
            });
        }
    }
    if wrapping {
        let max_row = rows - 1;
        let max_col = cols - 1;
        for col in 0..cols {
            list.push(EdgeCandidate {
                a: grid.index_of(Position::new(max_row, col)),
                b: grid.index_of(Position::new(0, col)),
                dir: Direction::South,
                weight: rng.next_weight(),
            });
        }
        for row in 0..rows {
            list.push(EdgeCandidate {
                a: grid.index_of(Position::new(row, max_col)),
                b: grid.index_of(Position::new(row, 0)),
                dir: Direction::East,
                weight: rng.next_weight(),
            });
        }
    }

    // Stable: enumeration order breaks ties between equal weights.
    list.sort_by_key(|edge| edge.weight);
    list
}

/// Pick the edges to open: a spanning tree first, then extras from the
/// discard pile (in discard order) until `edges_needed` are chosen.
fn select_edges(
    worklist: Vec<EdgeCandidate>,
    node_count: usize,
    edges_needed: usize,
) -> Vec<EdgeCandidate> {
    let spanning_target = node_count - 1;
    let mut sets = DisjointSets::new(node_count);
    let mut selected = Vec::with_capacity(edges_needed);
    let mut discarded = Vec::new();

    for edge in worklist {
        if selected.len() >= spanning_target {
            // The untouched tail joins the discard pile unexamined.
            discarded.push(edge);
        } else if edge.connected(&mut sets) {
            discarded.push(edge);
        } else {
            edge.union(&mut sets);
            selected.push(edge);
        }
    }

    let extra = edges_needed - spanning_target;
    selected.extend(discarded.into_iter().take(extra));
    selected
}

/// Degree-2 empty rooms become pass-through corridors. Degree-1 dead ends
/// stay ordinary rooms.
fn promote_hallways(grid: &mut Grid) {
    for node in grid.iter_mut() {
        if node.room_type() == RoomType::Empty && node.connections().len() == 2 {
            node.set_room_type(RoomType::Hallway);
        }
    }
}

/// Deal one hazard type onto the board.
///
/// The shuffled candidate list is consumed from the front without
/// re-filtering: rooms that already hold a type other than the hazard's
/// counterpart are skipped but still spent. The requested percentage is
/// therefore an upper bound, not a guarantee.
fn place_hazards(grid: &mut Grid, hazard: RoomType, percent: u32, seed: u64) {
    let total = grid.len() as i64;
    let rooms_per_hazard = (1.0 / (f64::from(percent) / 100.0)) as i64;
    let mut needed = total / rooms_per_hazard;

    let mut order: Vec<usize> = (0..grid.len()).collect();
    GameRng::new(hazard_shuffle_seed(seed, hazard)).shuffle(&mut order);

    for index in order {
        if needed == 0 {
            break;
        }
        let node = grid.node_at_mut(index);
        if node.room_type() == RoomType::Empty {
            node.set_room_type(hazard);
            needed -= 1;
        } else if node.room_type() == hazard.counterpart() {
            node.set_room_type(RoomType::SuperbatAndPit);
            needed -= 1;
        }
    }
}

/// Stamp NextToWumpus / NextToPit onto every effective neighbor of each
/// hazard room, skipping through hallways.
fn propagate_hints(grid: &mut Grid) {
    for index in 0..grid.len() {
        let hint = match grid.node_at(index).room_type() {
            RoomType::Wumpus => RoomAttribute::NextToWumpus,
            RoomType::Pit | RoomType::SuperbatAndPit => RoomAttribute::NextToPit,
            _ => continue,
        };
        let pos = grid.position_of(index);
        let dirs: Vec<Direction> = grid.node_at(index).connections().to_vec();
        for dir in dirs {
            let (neighbor, _) = grid.resolve_through_hallways(pos, dir);
            grid.node_mut(neighbor).add_attribute(hint);
        }
    }
}
