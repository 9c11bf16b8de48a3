//! Property tests over random small grids with no spawned obstacles.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uninformed_search::algorithms::path_cost;
use uninformed_search::simulation::Simulation;
use uninformed_search::{Algorithm, Grid, ObstacleSpawner, Position, SearchEngine};

fn random_grid(rows: usize, cols: usize, wall_probability: f64, seed: u64) -> Grid {
    let mut grid = Grid::new(rows, cols, Position::new(0, 0), Position::new(rows - 1, cols - 1))
        .expect("corner endpoints are always valid");
    let mut rng = StdRng::seed_from_u64(seed);
    grid.generate_random_walls(wall_probability, &mut rng)
        .expect("probability in range");
    grid
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (2usize..=7, 2usize..=7, 0.0f64..0.45, any::<u64>())
        .prop_map(|(rows, cols, prob, seed)| random_grid(rows, cols, prob, seed))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn runs_are_deterministic_without_obstacles(grid in grid_strategy()) {
        for algorithm in Algorithm::ALL {
            let mut first_grid = grid.clone();
            let mut first = SearchEngine::new(&mut first_grid, ObstacleSpawner::disabled());
            let found = first.run(algorithm);

            let mut second_grid = grid.clone();
            let mut second = SearchEngine::new(&mut second_grid, ObstacleSpawner::disabled());
            prop_assert_eq!(found, second.run(algorithm));
            prop_assert_eq!(first.path(), second.path());
            prop_assert_eq!(first.history(), second.history());
        }
    }

    #[test]
    fn successful_paths_are_walkable(grid in grid_strategy()) {
        let mut work = grid.clone();
        let mut engine = SearchEngine::new(&mut work, ObstacleSpawner::disabled());
        for algorithm in Algorithm::ALL {
            if !engine.run(algorithm) {
                prop_assert!(engine.path().is_empty());
                continue;
            }
            let path = engine.path();
            prop_assert_eq!(path.first(), Some(&grid.start()));
            prop_assert_eq!(path.last(), Some(&grid.target()));
            for pair in path.windows(2) {
                prop_assert!(pair[0].is_adjacent(pair[1]));
            }
            for pos in path {
                prop_assert!(!grid.is_wall(*pos));
            }
        }
    }

    #[test]
    fn uniform_cost_is_cheapest(grid in grid_strategy()) {
        let reference = Simulation::optimal_cost(&grid);
        let mut work = grid.clone();
        let mut engine = SearchEngine::new(&mut work, ObstacleSpawner::disabled());

        let found = engine.run(Algorithm::UniformCost);
        prop_assert_eq!(found, reference.is_some());

        let mut bfs_grid = grid.clone();
        let bfs_found =
            SearchEngine::new(&mut bfs_grid, ObstacleSpawner::disabled()).run(Algorithm::BreadthFirst);
        prop_assert_eq!(found, bfs_found);
        let Some(optimal) = reference else {
            return Ok(());
        };
        let best = path_cost(engine.path());
        prop_assert!((best - optimal).abs() < 1e-6, "ucs {} vs optimal {}", best, optimal);

        for algorithm in Algorithm::ALL {
            if engine.run(algorithm) {
                prop_assert!(best <= path_cost(engine.path()) + 1e-9, "{} beat ucs", algorithm);
            }
        }
    }

    #[test]
    fn explored_sets_only_grow(grid in grid_strategy()) {
        let mut work = grid.clone();
        let mut engine = SearchEngine::new(&mut work, ObstacleSpawner::disabled());
        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::IterativeDeepening {
                continue;
            }
            engine.run(algorithm);
            let explored: Vec<_> = engine.history().explored_history().collect();
            for pair in explored.windows(2) {
                prop_assert!(pair[0].is_subset(pair[1]));
            }
        }
    }

    #[test]
    fn spawned_obstacles_respect_the_layout(grid in grid_strategy(), seed in any::<u64>()) {
        let mut work = grid.clone();
        let spawner = ObstacleSpawner::seeded(0.3, seed).unwrap();
        let mut engine = SearchEngine::new(&mut work, spawner);
        engine.run(Algorithm::Bidirectional);

        let after = engine.grid();
        prop_assert!(!after.is_obstacle(grid.start()));
        prop_assert!(!after.is_obstacle(grid.target()));
        prop_assert!(after.walls().is_disjoint(after.obstacles()));
        prop_assert_eq!(after.obstacles().len(), engine.history().obstacle_spawn_steps().len());
    }
}
