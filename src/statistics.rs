use crate::algorithms::{path_cost, SearchEngine};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct RunStatistics {
    /// Engine iterations, one per history snapshot.
    pub steps: usize,
    pub expansions: usize,
    /// Moves along the returned path, zero when no path was found.
    pub path_length: usize,
    pub path_cost: f64,
    pub obstacles_spawned: usize,
    pub peak_frontier: usize,
    pub elapsed: Duration,
}

impl RunStatistics {
    /// Collects the figures of the engine's last run.
    pub fn from_engine(engine: &SearchEngine<'_>, elapsed: Duration) -> Self {
        let history = engine.history();
        let path = engine.path();
        RunStatistics {
            steps: history.len(),
            expansions: engine.expansions(),
            path_length: path.len().saturating_sub(1),
            path_cost: path_cost(path),
            obstacles_spawned: history.obstacle_spawn_steps().len(),
            peak_frontier: history.peak_frontier(),
            elapsed,
        }
    }

    /// Path cost relative to the optimal cost on the static grid; 1.0 is optimal.
    pub fn cost_ratio(&self, optimal_cost: f64) -> Option<f64> {
        if self.path_length > 0 && optimal_cost > 0.0 {
            Some(self.path_cost / optimal_cost)
        } else {
            None
        }
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(f, "Nodes Expanded: {}", self.expansions)?;
        writeln!(f, "Peak Frontier: {}", self.peak_frontier)?;
        writeln!(f, "Obstacles Spawned: {}", self.obstacles_spawned)?;
        if self.path_length > 0 {
            writeln!(f, "Path Length: {} moves", self.path_length)?;
            writeln!(f, "Path Cost: {:.3}", self.path_cost)?;
        } else {
            writeln!(f, "Path: none")?;
        }
        writeln!(f, "Elapsed: {:.2?}", self.elapsed)?;
        Ok(())
    }
}
