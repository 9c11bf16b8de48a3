//! Uninformed search on an 8-connected grid with obstacles that appear
//! while the search runs.
//!
//! Six strategies are available through [`algorithms::SearchEngine`]:
//! breadth-first, depth-first, uniform-cost, depth-limited, iterative
//! deepening and bidirectional breadth-first. Every run records a
//! [`history::History`] of frontier and explored snapshots that can be
//! replayed step by step.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod logging;
pub mod obstacles;
pub mod simulation;
pub mod statistics;

pub use algorithms::{Algorithm, SearchEngine};
pub use error::{ConfigError, GridError};
pub use grid::{Direction, Grid, Position};
pub use history::{History, StepSnapshot};
pub use obstacles::ObstacleSpawner;
