use crate::algorithms::path::move_cost;
use crate::algorithms::{Algorithm, SearchEngine};
use crate::config::Config;
use crate::error::{ConfigError, GridError};
use crate::grid::{Grid, Position};
use crate::obstacles::ObstacleSpawner;
use crate::statistics::RunStatistics;
use pathfinding::prelude::dijkstra;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Move costs are scaled to integer thousandths for the reference search.
const COST_SCALE: f64 = 1000.0;

/// A reproducible starting layout: the walled grid every run starts from,
/// plus the seed its obstacles are drawn from.
#[derive(Debug, Clone)]
pub struct Environment {
    grid: Grid,
    seed: u64,
}

impl Environment {
    /// Build the layout described by `config`, placing random walls with
    /// an RNG seeded from `seed`.
    pub fn generate(config: &Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let (start, target) = config.endpoints()?;
        let mut grid = Grid::new(config.rows, config.cols, start, target)?;

        let mut rng = StdRng::seed_from_u64(seed);
        grid.generate_random_walls(config.wall_probability, &mut rng)?;

        tracing::info!(
            seed,
            rows = grid.rows(),
            cols = grid.cols(),
            start = %grid.start(),
            target = %grid.target(),
            walls = grid.walls().len(),
            "generated environment"
        );
        Ok(Environment { grid, seed })
    }

    /// Wrap an existing grid, e.g. one parsed from a text layout.
    pub fn from_grid(mut grid: Grid, seed: u64) -> Self {
        grid.reset_obstacles();
        Environment { grid, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// A fresh copy of the layout with no obstacles.
    pub fn create_grid(&self) -> Grid {
        self.grid.clone()
    }

    /// Seed for the obstacle spawner, distinct from the wall seed.
    fn obstacle_seed(&self) -> u64 {
        self.seed.wrapping_add(1)
    }
}

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub success: bool,
    pub path: Vec<Position>,
    pub statistics: RunStatistics,
    /// Grid as the run left it, obstacles included.
    pub grid: Grid,
}

/// Runs one or more algorithms against the same environment.
///
/// Each run gets a fresh grid and an identically seeded obstacle spawner,
/// so results are comparable and repeatable.
pub struct Simulation {
    config: Config,
    environment: Environment,
    reference_cost: Option<f64>,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let environment = Environment::generate(&config, seed)?;
        Ok(Self::with_environment(config, environment))
    }

    pub fn with_environment(config: Config, environment: Environment) -> Self {
        let reference_cost = Self::optimal_cost(environment.grid());
        if reference_cost.is_none() {
            tracing::warn!(
                seed = environment.seed(),
                "target is unreachable on the static layout; every search will fail"
            );
        }
        Simulation {
            config,
            environment,
            reference_cost,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Optimal path cost on the obstacle-free layout, if the target is reachable.
    pub fn reference_cost(&self) -> Option<f64> {
        self.reference_cost
    }

    pub fn run(&self, algorithm: Algorithm) -> Result<AlgorithmResult, GridError> {
        let mut grid = self.environment.create_grid();
        let spawner = ObstacleSpawner::seeded(
            self.config.obstacle_probability,
            self.environment.obstacle_seed(),
        )?;
        let (success, statistics, path) = {
            let mut engine =
                SearchEngine::new(&mut grid, spawner).with_depth_limit(self.config.depth_limit);
            let started = Instant::now();
            let success = engine.run(algorithm);
            let statistics = RunStatistics::from_engine(&engine, started.elapsed());
            (success, statistics, engine.path().to_vec())
        };

        tracing::info!(
            %algorithm,
            success,
            steps = statistics.steps,
            expansions = statistics.expansions,
            obstacles = statistics.obstacles_spawned,
            "run complete"
        );

        Ok(AlgorithmResult {
            algorithm,
            success,
            path,
            statistics,
            grid,
        })
    }

    /// Runs every algorithm selected in the configuration, in order.
    pub fn run_all(&self) -> Result<Vec<AlgorithmResult>, ConfigError> {
        let algorithms = self.config.algorithms()?;
        let mut results = Vec::with_capacity(algorithms.len());
        for algorithm in algorithms {
            results.push(self.run(algorithm)?);
        }
        Ok(results)
    }

    /// Cheapest start-to-target cost on `grid` as it stands, computed
    /// independently of the engine with the `pathfinding` crate.
    pub fn optimal_cost(grid: &Grid) -> Option<f64> {
        let target = grid.target();
        dijkstra(
            &grid.start(),
            |&p| {
                grid.neighbors(p)
                    .into_iter()
                    .map(|n| (n, scaled_cost(p, n)))
                    .collect::<Vec<_>>()
            },
            |&p| p == target,
        )
        .map(|(_, cost)| f64::from(cost) / COST_SCALE)
    }

    /// Print comparison results in a table.
    pub fn print_comparison_results(&self, results: &[AlgorithmResult]) {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===");
        println!("Environment seed: {}", self.environment.seed());
        match self.reference_cost {
            Some(cost) => println!("Optimal static cost (Dijkstra): {:.3}", cost),
            None => println!("Optimal static cost (Dijkstra): unreachable"),
        }
        println!();

        println!(
            "{:<15} {:<8} {:<8} {:<10} {:<8} {:<10} {:<8} {:<10} {:<12}",
            "Algorithm", "Success", "Steps", "Expanded", "Moves", "Cost", "Ratio", "Obstacles", "Time"
        );
        println!("{}", "-".repeat(97));

        for result in results {
            let stats = &result.statistics;
            let success_str = if result.success { "✓" } else { "✗" };
            let (moves_str, cost_str) = if result.success {
                (stats.path_length.to_string(), format!("{:.3}", stats.path_cost))
            } else {
                ("-".to_string(), "-".to_string())
            };
            let ratio_str = self
                .reference_cost
                .and_then(|optimal| stats.cost_ratio(optimal))
                .map_or_else(|| "-".to_string(), |ratio| format!("{:.3}", ratio));

            println!(
                "{:<15} {:<8} {:<8} {:<10} {:<8} {:<10} {:<8} {:<10} {:<12}",
                result.algorithm.name(),
                success_str,
                stats.steps,
                stats.expansions,
                moves_str,
                cost_str,
                ratio_str,
                stats.obstacles_spawned,
                format!("{:.2?}", stats.elapsed),
            );
        }
        println!();

        let successful: Vec<_> = results.iter().filter(|r| r.success).collect();
        if successful.is_empty() {
            println!("No algorithm reached the target.");
            return;
        }

        println!("=== PERFORMANCE ANALYSIS ===");
        if let Some(cheapest) = successful
            .iter()
            .min_by(|a, b| a.statistics.path_cost.total_cmp(&b.statistics.path_cost))
        {
            println!(
                "Cheapest path: {} ({:.3})",
                cheapest.algorithm.description(),
                cheapest.statistics.path_cost
            );
        }
        if let Some(leanest) = successful.iter().min_by_key(|r| r.statistics.expansions) {
            println!(
                "Fewest expansions: {} ({} nodes)",
                leanest.algorithm.description(),
                leanest.statistics.expansions
            );
        }
        if let Some(fastest) = successful.iter().min_by_key(|r| r.statistics.elapsed) {
            println!(
                "Fastest: {} ({:.2?})",
                fastest.algorithm.description(),
                fastest.statistics.elapsed
            );
        }
        let failed: Vec<_> = results.iter().filter(|r| !r.success).map(|r| r.algorithm.name()).collect();
        if !failed.is_empty() {
            println!("Did not reach the target: {}", failed.join(", "));
        }
    }
}

fn scaled_cost(from: Position, to: Position) -> u32 {
    (move_cost(from, to) * COST_SCALE).round() as u32
}
