//! Integration tests for SearchEngine across all six algorithms
//!
//! These tests verify that every algorithm:
//! - Fails cleanly when the target is walled in
//! - Produces start-to-target paths of adjacent, wall-free cells
//! - Keeps frontier and explored histories in step
//! - Reacts to obstacles spawned during the run

use rustc_hash::FxHashSet;
use uninformed_search::algorithms::path_cost;
use uninformed_search::{Algorithm, Grid, ObstacleSpawner, Position, SearchEngine};

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

fn maze() -> Grid {
    "
    S...#....
    .##.#.##.
    .#..#..#.
    .#.###.#.
    .#.....#T
    "
    .parse()
    .expect("valid layout")
}

fn assert_valid_path(grid: &Grid, path: &[Position]) {
    assert_eq!(path.first(), Some(&grid.start()));
    assert_eq!(path.last(), Some(&grid.target()));
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} -> {} is not a move", pair[0], pair[1]);
    }
    for pos in path {
        assert!(!grid.is_wall(*pos), "path crosses wall at {pos}");
    }
}

#[test]
fn enclosed_target_defeats_every_algorithm() {
    let mut grid: Grid = "
        S....
        ..###
        ..#T#
        ..###
        .....
    "
    .parse()
    .unwrap();
    let mut engine = SearchEngine::new(&mut grid, ObstacleSpawner::disabled());

    for algorithm in Algorithm::ALL {
        assert!(!engine.run(algorithm), "{algorithm} found a path");
        assert!(engine.path().is_empty(), "{algorithm} left a path behind");
        assert!(!engine.history().is_empty(), "{algorithm} recorded nothing");
    }
}

#[test]
fn every_algorithm_solves_the_maze() {
    let mut grid = maze();
    let reference = grid.clone();
    let mut engine = SearchEngine::new(&mut grid, ObstacleSpawner::disabled()).with_depth_limit(40);

    for algorithm in Algorithm::ALL {
        assert!(engine.run(algorithm), "{algorithm} failed");
        assert_valid_path(&reference, engine.path());
    }
}

#[test]
fn uniform_cost_is_never_beaten_on_the_maze() {
    let mut grid = maze();
    let mut engine = SearchEngine::new(&mut grid, ObstacleSpawner::disabled()).with_depth_limit(40);

    assert!(engine.run(Algorithm::UniformCost));
    let best = path_cost(engine.path());
    for algorithm in Algorithm::ALL {
        assert!(engine.run(algorithm));
        assert!(best <= path_cost(engine.path()) + 1e-9, "{algorithm} beat UCS");
    }
}

#[test]
fn histories_stay_aligned_and_explored_only_grows() {
    let mut grid = maze();
    let mut engine = SearchEngine::new(&mut grid, ObstacleSpawner::disabled()).with_depth_limit(40);

    for algorithm in Algorithm::ALL {
        engine.run(algorithm);
        let history = engine.history();
        assert_eq!(history.frontier_history().count(), history.explored_history().count());

        // Iterative deepening restarts its explored set for every limit.
        if algorithm == Algorithm::IterativeDeepening {
            continue;
        }
        let explored: Vec<&FxHashSet<Position>> = history.explored_history().collect();
        for pair in explored.windows(2) {
            assert!(pair[0].is_subset(pair[1]), "{algorithm} forgot an explored cell");
        }
    }
}

#[test]
fn first_snapshot_holds_only_the_roots() {
    let mut grid = maze();
    let mut engine = SearchEngine::new(&mut grid, ObstacleSpawner::disabled());

    for algorithm in Algorithm::ALL {
        engine.run(algorithm);
        let first = engine.history().get(0).unwrap();
        assert!(first.explored.is_empty());
        let expected = if algorithm == Algorithm::Bidirectional {
            vec![p(0, 0), p(4, 8)]
        } else {
            vec![p(0, 0)]
        };
        assert_eq!(first.frontier, expected, "{algorithm}");
    }
}

#[test]
fn spawned_obstacles_never_cover_endpoints_or_walls() {
    let mut grid = maze();
    let spawner = ObstacleSpawner::seeded(0.5, 99).unwrap();
    let mut engine = SearchEngine::new(&mut grid, spawner);

    engine.run(Algorithm::BreadthFirst);
    let spawned = engine.history().obstacle_spawn_steps().len();
    let grid = engine.grid();
    assert_eq!(grid.obstacles().len(), spawned);
    assert!(!grid.is_obstacle(grid.start()));
    assert!(!grid.is_obstacle(grid.target()));
    assert!(grid.walls().is_disjoint(grid.obstacles()));
}

#[test]
fn obstacle_spawned_this_step_blocks_expansion() {
    // The only route runs through (0, 1). With every step spawning onto
    // the single empty cell, it is blocked before the start is expanded.
    let mut grid: Grid = "S.T".parse().unwrap();
    let spawner = ObstacleSpawner::seeded(1.0, 0).unwrap();
    let mut engine = SearchEngine::new(&mut grid, spawner);

    assert!(!engine.run(Algorithm::BreadthFirst));
    assert_eq!(engine.history().obstacle_spawn_steps(), vec![0]);
    assert!(engine.grid().is_obstacle(p(0, 1)));
}

#[test]
fn obstacles_persist_until_reset() {
    let mut grid: Grid = "S.T".parse().unwrap();
    {
        let spawner = ObstacleSpawner::seeded(1.0, 0).unwrap();
        let mut engine = SearchEngine::new(&mut grid, spawner);
        engine.run(Algorithm::DepthFirst);
    }
    assert_eq!(grid.obstacles().len(), 1);

    let mut engine = SearchEngine::new(&mut grid, ObstacleSpawner::disabled());
    assert!(!engine.run(Algorithm::DepthFirst));

    grid.reset_obstacles();
    let mut engine = SearchEngine::new(&mut grid, ObstacleSpawner::disabled());
    assert!(engine.run(Algorithm::DepthFirst));
    assert_eq!(engine.path(), &[p(0, 0), p(0, 1), p(0, 2)]);
}

#[test]
fn dfs_first_expansions_follow_reversed_push_order() {
    let mut grid = Grid::new(3, 3, p(0, 0), p(2, 2)).unwrap();
    let mut engine = SearchEngine::new(&mut grid, ObstacleSpawner::disabled());
    assert!(engine.run(Algorithm::DepthFirst));

    let frontiers: Vec<&[Position]> = engine.history().frontier_history().collect();
    // Right, Down-Right, Down from (0, 0); Right is on top.
    assert_eq!(frontiers[1], &[p(0, 1), p(1, 1), p(1, 0)]);
    assert_eq!(engine.path(), &[p(0, 0), p(0, 1), p(1, 2), p(2, 2)]);
}
