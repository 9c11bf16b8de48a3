//! Uninformed grid searches driven one iteration at a time.
//!
//! Every algorithm is a state machine implementing [`SearchState`].
//! [`SearchEngine`] owns the loop: each iteration spawns an obstacle,
//! records a [`StepSnapshot`], then lets the state pop and expand.

pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod dls;
pub mod path;
pub mod ucs;

use crate::error::ParseAlgorithmError;
use crate::grid::{Grid, Position};
use crate::history::{History, StepSnapshot};
use crate::obstacles::ObstacleSpawner;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

pub use bfs::BreadthFirst;
pub use bidirectional::Bidirectional;
pub use dfs::DepthFirst;
pub use dls::{DepthLimited, IterativeDeepening};
pub use path::{path_cost, reconstruct_path};
pub use ucs::UniformCost;

/// Depth limit used by depth-limited search unless configured otherwise.
pub const DEFAULT_DEPTH_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    DepthLimited,
    IterativeDeepening,
    Bidirectional,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::UniformCost,
        Algorithm::DepthLimited,
        Algorithm::IterativeDeepening,
        Algorithm::Bidirectional,
    ];

    /// Short name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::UniformCost => "ucs",
            Algorithm::DepthLimited => "dls",
            Algorithm::IterativeDeepening => "iddfs",
            Algorithm::Bidirectional => "bidirectional",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "BFS - Breadth-First Search",
            Algorithm::DepthFirst => "DFS - Depth-First Search",
            Algorithm::UniformCost => "UCS - Uniform-Cost Search",
            Algorithm::DepthLimited => "DLS - Depth-Limited Search",
            Algorithm::IterativeDeepening => "IDDFS - Iterative Deepening DFS",
            Algorithm::Bidirectional => "Bidirectional Search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::BreadthFirst),
            "dfs" => Ok(Algorithm::DepthFirst),
            "ucs" => Ok(Algorithm::UniformCost),
            "dls" => Ok(Algorithm::DepthLimited),
            "iddfs" => Ok(Algorithm::IterativeDeepening),
            "bidirectional" | "bidi" => Ok(Algorithm::Bidirectional),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Outcome of a single iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The target was reached. `expanded` counts cells committed earlier in
    /// the same iteration.
    Found { path: Vec<Position>, expanded: usize },
    /// Search goes on; carries the number of cells newly marked explored.
    Continue(usize),
}

/// One search algorithm as an explicit state machine.
pub trait SearchState {
    /// Whether another iteration can run. May advance internal phases
    /// (iterative deepening rolls over to its next depth limit here).
    fn has_frontier(&mut self) -> bool;

    /// Frontier contents in pop order.
    fn frontier(&self) -> Vec<Position>;

    fn explored(&self) -> FxHashSet<Position>;

    /// Pop one node, test it, and expand it against the current grid.
    fn step(&mut self, grid: &Grid) -> Step;
}

/// Runs searches against a borrowed grid and keeps the result of the last
/// run: its success flag, path and step history.
pub struct SearchEngine<'g> {
    grid: &'g mut Grid,
    spawner: ObstacleSpawner,
    depth_limit: usize,
    history: History,
    path: Vec<Position>,
    expansions: usize,
}

impl<'g> SearchEngine<'g> {
    pub fn new(grid: &'g mut Grid, spawner: ObstacleSpawner) -> Self {
        SearchEngine {
            grid,
            spawner,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            history: History::new(),
            path: Vec::new(),
            expansions: 0,
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Path of the last successful run, empty otherwise.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Cells committed to an explored set during the last run.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Runs `algorithm` to completion. Returns `true` and fills
    /// [`path`](Self::path) when the target was reached; the history is
    /// populated either way. Obstacles spawned here stay on the grid until
    /// the caller resets them.
    pub fn run(&mut self, algorithm: Algorithm) -> bool {
        self.history.clear();
        self.path.clear();
        self.expansions = 0;

        let start = self.grid.start();
        let target = self.grid.target();
        tracing::debug!(%algorithm, %start, %target, "search started");

        let found = match algorithm {
            Algorithm::BreadthFirst => self.drive(BreadthFirst::new(start, target)),
            Algorithm::DepthFirst => self.drive(DepthFirst::new(start, target)),
            Algorithm::UniformCost => self.drive(UniformCost::new(start, target)),
            Algorithm::DepthLimited => {
                self.drive(DepthLimited::new(start, target, self.depth_limit))
            }
            Algorithm::IterativeDeepening => {
                let max_limit = self.grid.rows() * self.grid.cols();
                self.drive(IterativeDeepening::new(start, target, max_limit))
            }
            Algorithm::Bidirectional => self.drive(Bidirectional::new(start, target)),
        };

        tracing::debug!(
            %algorithm,
            found,
            steps = self.history.len(),
            expansions = self.expansions,
            path_len = self.path.len(),
            "search finished"
        );
        found
    }

    fn drive<S: SearchState>(&mut self, mut state: S) -> bool {
        while state.has_frontier() {
            let obstacle_spawned = self.spawner.spawn(self.grid).is_some();
            self.history.record(StepSnapshot {
                frontier: state.frontier(),
                explored: state.explored(),
                obstacle_spawned,
            });

            match state.step(self.grid) {
                Step::Found { path, expanded } => {
                    self.expansions += expanded;
                    self.path = path;
                    return true;
                }
                Step::Continue(expanded) => self.expansions += expanded,
            }
        }
        false
    }
}
