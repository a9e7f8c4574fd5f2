//! Property tests over randomized configurations.
//!
//! Whatever the dimensions, seed, wrap mode, and wall budget, every
//! generated board must be fully connected, open exactly the requested
//! number of walls, keep its connections symmetric, and respect the
//! hallway shape invariant.

use std::collections::VecDeque;

use proptest::prelude::*;

use wumpus_engine::{Direction, Maze, MazeConfig, Position, RoomType};

fn step(pos: Position, dir: Direction, rows: usize, cols: usize) -> Position {
    let (dr, dc) = dir.delta();
    let row = pos.row as isize + dr;
    let col = pos.col as isize + dc;
    Position::new(
        if row < 0 {
            rows - 1
        } else if row as usize >= rows {
            0
        } else {
            row as usize
        },
        if col < 0 {
            cols - 1
        } else if col as usize >= cols {
            0
        } else {
            col as usize
        },
    )
}

fn build(
    rows: usize,
    cols: usize,
    wrapping: bool,
    openness: usize,
    bats: u32,
    pits: u32,
    seed: u64,
) -> Maze {
    // Scale the wall budget between "spanning tree only" (openness 0)
    // and "every wall open" (openness 100).
    let base = MazeConfig::builder()
        .rows(rows)
        .cols(cols)
        .wrapping(wrapping)
        .finish();
    let spare = base.total_walls() - (rows * cols - 1);
    let walls_remaining = spare - spare * openness / 100;

    Maze::new(
        MazeConfig::builder()
            .rows(rows)
            .cols(cols)
            .wrapping(wrapping)
            .goal(rows - 1, cols - 1)
            .walls_remaining(walls_remaining)
            .bat_percent(bats)
            .pit_percent(pits)
            .seed(seed)
            .finish(),
    )
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_room_reachable(
        rows in 1usize..8,
        cols in 1usize..8,
        wrapping in any::<bool>(),
        openness in 0usize..=100,
        bats in 0u32..=100,
        pits in 0u32..=100,
        seed in any::<u64>(),
    ) {
        prop_assume!(rows * cols > 1);
        let maze = build(rows, cols, wrapping, openness, bats, pits, seed);
        let nodes = maze.nodes();

        let mut seen = vec![vec![false; cols]; rows];
        let mut queue = VecDeque::new();
        seen[0][0] = true;
        queue.push_back(Position::new(0, 0));
        while let Some(pos) = queue.pop_front() {
            for &dir in &nodes[pos.row][pos.col].connections {
                let next = step(pos, dir, rows, cols);
                if !seen[next.row][next.col] {
                    seen[next.row][next.col] = true;
                    queue.push_back(next);
                }
            }
        }
        let reached = seen.iter().flatten().filter(|&&v| v).count();
        prop_assert_eq!(reached, rows * cols);
    }

    #[test]
    fn prop_edge_count_matches_budget(
        rows in 1usize..8,
        cols in 1usize..8,
        wrapping in any::<bool>(),
        openness in 0usize..=100,
        seed in any::<u64>(),
    ) {
        prop_assume!(rows * cols > 1);
        let maze = build(rows, cols, wrapping, openness, 0, 0, seed);
        let expected = maze.config().total_walls() - maze.config().walls_remaining;
        prop_assert_eq!(maze.edge_count(), expected);
        prop_assert!(maze.edge_count() >= rows * cols - 1);
    }

    #[test]
    fn prop_connections_are_symmetric(
        rows in 1usize..8,
        cols in 1usize..8,
        wrapping in any::<bool>(),
        openness in 0usize..=100,
        seed in any::<u64>(),
    ) {
        prop_assume!(rows * cols > 1);
        let maze = build(rows, cols, wrapping, openness, 0, 0, seed);
        let nodes = maze.nodes();
        for row in nodes.iter() {
            for snap in row {
                for &dir in &snap.connections {
                    let neighbor = step(snap.position, dir, rows, cols);
                    prop_assert!(
                        nodes[neighbor.row][neighbor.col].is_connected(dir.opposite()),
                        "{} -> {} not mirrored at {}",
                        snap.position,
                        dir,
                        neighbor
                    );
                }
            }
        }
    }

    #[test]
    fn prop_hallways_are_degree_two_non_hazards(
        rows in 1usize..8,
        cols in 1usize..8,
        wrapping in any::<bool>(),
        openness in 0usize..=100,
        bats in 0u32..=100,
        pits in 0u32..=100,
        seed in any::<u64>(),
    ) {
        prop_assume!(rows * cols > 1);
        let maze = build(rows, cols, wrapping, openness, bats, pits, seed);
        for snap in maze.nodes().iter().flatten() {
            if snap.room_type == RoomType::Hallway {
                prop_assert_eq!(snap.connections.len(), 2);
            }
            if snap.room_type.is_hazard() {
                prop_assert_ne!(snap.room_type, RoomType::Hallway);
            }
        }
    }

    #[test]
    fn prop_builds_are_reproducible(
        rows in 1usize..8,
        cols in 1usize..8,
        wrapping in any::<bool>(),
        openness in 0usize..=100,
        bats in 0u32..=100,
        pits in 0u32..=100,
        seed in any::<u64>(),
    ) {
        prop_assume!(rows * cols > 1);
        let first = build(rows, cols, wrapping, openness, bats, pits, seed);
        let second = build(rows, cols, wrapping, openness, bats, pits, seed);
        prop_assert_eq!(first.render(), second.render());
        prop_assert_eq!(first.nodes(), second.nodes());
    }
}
