use crate::grid::Position;
use rustc_hash::FxHashSet;

/// Search state captured at the top of one engine iteration, after the
/// obstacle spawn and before the next node is popped.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSnapshot {
    /// Frontier in the order the algorithm would pop it.
    pub frontier: Vec<Position>,
    pub explored: FxHashSet<Position>,
    pub obstacle_spawned: bool,
}

/// Every snapshot of one run, in iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    snapshots: Vec<StepSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, snapshot: StepSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&StepSnapshot> {
        self.snapshots.get(step)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepSnapshot> {
        self.snapshots.iter()
    }

    pub fn frontier_history(&self) -> impl Iterator<Item = &[Position]> + '_ {
        self.snapshots.iter().map(|s| s.frontier.as_slice())
    }

    pub fn explored_history(&self) -> impl Iterator<Item = &FxHashSet<Position>> + '_ {
        self.snapshots.iter().map(|s| &s.explored)
    }

    /// Indices of the steps on which an obstacle appeared.
    pub fn obstacle_spawn_steps(&self) -> Vec<usize> {
        self.snapshots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.obstacle_spawned.then_some(i))
            .collect()
    }

    /// Largest frontier seen during the run.
    pub fn peak_frontier(&self) -> usize {
        self.snapshots.iter().map(|s| s.frontier.len()).max().unwrap_or(0)
    }
}
