use crate::error::GridError;
use crate::grid::{Grid, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Per-step chance of a new obstacle when none is configured.
pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.02;

/// Drops obstacles onto empty cells while a search runs.
///
/// Owns its random source so that a seeded spawner replays the same
/// sequence of obstacles on every run.
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    probability: f64,
    rng: StdRng,
}

impl ObstacleSpawner {
    pub fn new(probability: f64, rng: StdRng) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }
        Ok(ObstacleSpawner { probability, rng })
    }

    pub fn seeded(probability: f64, seed: u64) -> Result<Self, GridError> {
        Self::new(probability, StdRng::seed_from_u64(seed))
    }

    /// A spawner that never places anything.
    pub fn disabled() -> Self {
        ObstacleSpawner {
            probability: 0.0,
            rng: StdRng::seed_from_u64(0),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// One spawn attempt. With the configured probability, picks a cell
    /// uniformly among [`Grid::empty_cells`] and turns it into an obstacle.
    /// Returns the new obstacle, or `None` when the roll failed or no empty
    /// cell is left.
    pub fn spawn(&mut self, grid: &mut Grid) -> Option<Position> {
        if self.probability <= 0.0 || !self.rng.gen_bool(self.probability) {
            return None;
        }
        let pos = *grid.empty_cells().choose(&mut self.rng)?;
        grid.add_obstacle(pos);
        tracing::trace!(%pos, "obstacle spawned");
        Some(pos)
    }
}

impl Default for ObstacleSpawner {
    fn default() -> Self {
        Self::disabled()
    }
}
