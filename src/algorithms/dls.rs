use crate::algorithms::path::reconstruct_path;
use crate::algorithms::{SearchState, Step};
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};

/// Depth-first search that stops expanding at a fixed depth.
///
/// A node popped at exactly the limit is still tested against the target,
/// so a target `limit` moves away is found. Hitting the limit everywhere is
/// reported the same way as an unreachable target.
#[derive(Debug, Clone)]
pub struct DepthLimited {
    stack: Vec<(Position, usize)>,
    came_from: FxHashMap<Position, Position>,
    explored: FxHashSet<Position>,
    target: Position,
    limit: usize,
}

impl DepthLimited {
    pub fn new(start: Position, target: Position, limit: usize) -> Self {
        DepthLimited {
            stack: vec![(start, 0)],
            came_from: FxHashMap::default(),
            explored: FxHashSet::default(),
            target,
            limit,
        }
    }
}

impl SearchState for DepthLimited {
    fn has_frontier(&mut self) -> bool {
        !self.stack.is_empty()
    }

    fn frontier(&self) -> Vec<Position> {
        self.stack.iter().rev().map(|&(pos, _)| pos).collect()
    }

    fn explored(&self) -> FxHashSet<Position> {
        self.explored.clone()
    }

    fn step(&mut self, grid: &Grid) -> Step {
        let Some((current, depth)) = self.stack.pop() else {
            return Step::Continue(0);
        };
        if current == self.target {
            return Step::Found {
                path: reconstruct_path(&self.came_from, current),
                expanded: 0,
            };
        }
        if depth >= self.limit || !self.explored.insert(current) {
            return Step::Continue(0);
        }

        for neighbor in grid.neighbors(current).into_iter().rev() {
            if !self.explored.contains(&neighbor) {
                self.stack.push((neighbor, depth + 1));
                self.came_from.entry(neighbor).or_insert(current);
            }
        }
        Step::Continue(1)
    }
}

/// Runs a fresh [`DepthLimited`] pass for every limit in `0..max_limit`
/// until one reaches the target.
#[derive(Debug, Clone)]
pub struct IterativeDeepening {
    pass: DepthLimited,
    start: Position,
    target: Position,
    max_limit: usize,
}

impl IterativeDeepening {
    pub fn new(start: Position, target: Position, max_limit: usize) -> Self {
        IterativeDeepening {
            pass: DepthLimited::new(start, target, 0),
            start,
            target,
            max_limit,
        }
    }

    /// Limit of the pass currently running.
    pub fn limit(&self) -> usize {
        self.pass.limit
    }
}

impl SearchState for IterativeDeepening {
    fn has_frontier(&mut self) -> bool {
        if self.max_limit == 0 {
            return false;
        }
        while !self.pass.has_frontier() {
            let next = self.pass.limit + 1;
            if next >= self.max_limit {
                return false;
            }
            tracing::trace!(limit = next, "deepening");
            self.pass = DepthLimited::new(self.start, self.target, next);
        }
        true
    }

    fn frontier(&self) -> Vec<Position> {
        self.pass.frontier()
    }

    fn explored(&self) -> FxHashSet<Position> {
        self.pass.explored()
    }

    fn step(&mut self, grid: &Grid) -> Step {
        self.pass.step(grid)
    }
}
