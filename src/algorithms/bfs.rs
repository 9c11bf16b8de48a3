use crate::algorithms::path::reconstruct_path;
use crate::algorithms::{SearchState, Step};
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// FIFO search tree grown from a single root, without a goal test.
///
/// Breadth-first search wraps one of these; bidirectional search runs two.
#[derive(Debug, Clone)]
pub(crate) struct BfsTree {
    queue: VecDeque<Position>,
    queued: FxHashSet<Position>,
    came_from: FxHashMap<Position, Position>,
    explored: FxHashSet<Position>,
}

impl BfsTree {
    pub(crate) fn new(root: Position) -> Self {
        let mut queued = FxHashSet::default();
        queued.insert(root);
        BfsTree {
            queue: VecDeque::from([root]),
            queued,
            came_from: FxHashMap::default(),
            explored: FxHashSet::default(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn queue(&self) -> impl Iterator<Item = Position> + '_ {
        self.queue.iter().copied()
    }

    pub(crate) fn explored(&self) -> &FxHashSet<Position> {
        &self.explored
    }

    pub(crate) fn came_from(&self) -> &FxHashMap<Position, Position> {
        &self.came_from
    }

    pub(crate) fn pop(&mut self) -> Option<Position> {
        let current = self.queue.pop_front()?;
        self.queued.remove(&current);
        Some(current)
    }

    /// Marks `current` explored and queues its unseen neighbors, recording
    /// `current` as their parent. Returns `false` when `current` had
    /// already been explored.
    pub(crate) fn expand(&mut self, current: Position, grid: &Grid) -> bool {
        if !self.explored.insert(current) {
            return false;
        }
        for neighbor in grid.neighbors(current) {
            if !self.explored.contains(&neighbor) && self.queued.insert(neighbor) {
                self.queue.push_back(neighbor);
                self.came_from.insert(neighbor, current);
            }
        }
        true
    }
}

/// Breadth-first search: oldest frontier entry first.
#[derive(Debug, Clone)]
pub struct BreadthFirst {
    tree: BfsTree,
    target: Position,
}

impl BreadthFirst {
    pub fn new(start: Position, target: Position) -> Self {
        BreadthFirst {
            tree: BfsTree::new(start),
            target,
        }
    }
}

impl SearchState for BreadthFirst {
    fn has_frontier(&mut self) -> bool {
        !self.tree.is_empty()
    }

    fn frontier(&self) -> Vec<Position> {
        self.tree.queue().collect()
    }

    fn explored(&self) -> FxHashSet<Position> {
        self.tree.explored().clone()
    }

    fn step(&mut self, grid: &Grid) -> Step {
        let Some(current) = self.tree.pop() else {
            return Step::Continue(0);
        };
        if current == self.target {
            return Step::Found {
                path: reconstruct_path(self.tree.came_from(), current),
                expanded: 0,
            };
        }
        Step::Continue(usize::from(self.tree.expand(current, grid)))
    }
}
