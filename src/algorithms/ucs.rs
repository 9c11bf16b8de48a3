use crate::algorithms::path::{move_cost, reconstruct_path};
use crate::algorithms::{SearchState, Step};
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    cost: f64,
    seq: u64,
    pos: Position,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior: cheapest first, then oldest.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Uniform-cost search with straight moves costing 1 and diagonal moves
/// costing [`DIAGONAL_COST`](crate::algorithms::path::DIAGONAL_COST).
///
/// A cheaper route to a queued cell replaces its entry: the new entry gets
/// a fresh sequence number and the old one is dropped when it surfaces.
#[derive(Debug, Clone)]
pub struct UniformCost {
    queue: BinaryHeap<QueueEntry>,
    live: FxHashMap<Position, u64>,
    cost_so_far: FxHashMap<Position, f64>,
    came_from: FxHashMap<Position, Position>,
    explored: FxHashSet<Position>,
    next_seq: u64,
    target: Position,
}

impl UniformCost {
    pub fn new(start: Position, target: Position) -> Self {
        let mut ucs = UniformCost {
            queue: BinaryHeap::new(),
            live: FxHashMap::default(),
            cost_so_far: FxHashMap::default(),
            came_from: FxHashMap::default(),
            explored: FxHashSet::default(),
            next_seq: 0,
            target,
        };
        ucs.cost_so_far.insert(start, 0.0);
        ucs.push(start, 0.0);
        ucs
    }

    /// Accumulated cost of the cheapest route found so far to `pos`.
    pub fn cost_to(&self, pos: Position) -> Option<f64> {
        self.cost_so_far.get(&pos).copied()
    }

    fn push(&mut self, pos: Position, cost: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(pos, seq);
        self.queue.push(QueueEntry { cost, seq, pos });
    }

    fn is_live(&self, entry: &QueueEntry) -> bool {
        self.live.get(&entry.pos) == Some(&entry.seq)
    }

    fn pop(&mut self) -> Option<QueueEntry> {
        while let Some(entry) = self.queue.pop() {
            if self.is_live(&entry) {
                self.live.remove(&entry.pos);
                return Some(entry);
            }
        }
        None
    }
}

impl SearchState for UniformCost {
    fn has_frontier(&mut self) -> bool {
        !self.live.is_empty()
    }

    fn frontier(&self) -> Vec<Position> {
        let mut entries: Vec<&QueueEntry> = self.queue.iter().filter(|e| self.is_live(e)).collect();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.into_iter().map(|e| e.pos).collect()
    }

    fn explored(&self) -> FxHashSet<Position> {
        self.explored.clone()
    }

    fn step(&mut self, grid: &Grid) -> Step {
        let Some(QueueEntry { cost, pos: current, .. }) = self.pop() else {
            return Step::Continue(0);
        };
        if current == self.target {
            return Step::Found {
                path: reconstruct_path(&self.came_from, current),
                expanded: 0,
            };
        }
        if !self.explored.insert(current) {
            return Step::Continue(0);
        }

        for neighbor in grid.neighbors(current) {
            let new_cost = cost + move_cost(current, neighbor);
            let improves = self
                .cost_so_far
                .get(&neighbor)
                .map_or(true, |&known| new_cost < known);
            if improves {
                self.cost_so_far.insert(neighbor, new_cost);
                self.came_from.insert(neighbor, current);
                self.push(neighbor, new_cost);
            }
        }
        Step::Continue(1)
    }
}
