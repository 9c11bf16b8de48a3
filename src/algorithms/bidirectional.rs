use crate::algorithms::bfs::BfsTree;
use crate::algorithms::path::reconstruct_path;
use crate::algorithms::{SearchState, Step};
use crate::grid::{Grid, Position};
use rustc_hash::FxHashSet;

/// Two breadth-first trees, one rooted at the start and one at the target,
/// expanded alternately until one pops a cell the other has explored.
#[derive(Debug, Clone)]
pub struct Bidirectional {
    forward: BfsTree,
    backward: BfsTree,
}

impl Bidirectional {
    pub fn new(start: Position, target: Position) -> Self {
        Bidirectional {
            forward: BfsTree::new(start),
            backward: BfsTree::new(target),
        }
    }

    /// Start-to-meeting path joined with the reversed target-to-meeting path.
    fn join(&self, meeting: Position) -> Vec<Position> {
        let mut path = reconstruct_path(self.forward.came_from(), meeting);
        path.pop();
        let mut tail = reconstruct_path(self.backward.came_from(), meeting);
        tail.reverse();
        path.extend(tail);
        path
    }
}

impl SearchState for Bidirectional {
    fn has_frontier(&mut self) -> bool {
        !self.forward.is_empty() || !self.backward.is_empty()
    }

    /// Forward queue followed by the backward queue.
    fn frontier(&self) -> Vec<Position> {
        self.forward.queue().chain(self.backward.queue()).collect()
    }

    fn explored(&self) -> FxHashSet<Position> {
        self.forward
            .explored()
            .union(self.backward.explored())
            .copied()
            .collect()
    }

    fn step(&mut self, grid: &Grid) -> Step {
        let mut expanded = 0;

        if let Some(current) = self.forward.pop() {
            if self.backward.explored().contains(&current) {
                return Step::Found {
                    path: self.join(current),
                    expanded,
                };
            }
            expanded += usize::from(self.forward.expand(current, grid));
        }

        if let Some(current) = self.backward.pop() {
            if self.forward.explored().contains(&current) {
                return Step::Found {
                    path: self.join(current),
                    expanded,
                };
            }
            expanded += usize::from(self.backward.expand(current, grid));
        }

        Step::Continue(expanded)
    }
}
