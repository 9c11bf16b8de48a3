use crate::algorithms::path::reconstruct_path;
use crate::algorithms::{SearchState, Step};
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};

/// Depth-first search over an explicit stack.
///
/// Neighbors are pushed in reverse direction order, so the first direction
/// ends up on top and is expanded first.
#[derive(Debug, Clone)]
pub struct DepthFirst {
    stack: Vec<Position>,
    on_stack: FxHashSet<Position>,
    came_from: FxHashMap<Position, Position>,
    explored: FxHashSet<Position>,
    target: Position,
}

impl DepthFirst {
    pub fn new(start: Position, target: Position) -> Self {
        let mut on_stack = FxHashSet::default();
        on_stack.insert(start);
        DepthFirst {
            stack: vec![start],
            on_stack,
            came_from: FxHashMap::default(),
            explored: FxHashSet::default(),
            target,
        }
    }
}

impl SearchState for DepthFirst {
    fn has_frontier(&mut self) -> bool {
        !self.stack.is_empty()
    }

    /// Top of the stack first.
    fn frontier(&self) -> Vec<Position> {
        self.stack.iter().rev().copied().collect()
    }

    fn explored(&self) -> FxHashSet<Position> {
        self.explored.clone()
    }

    fn step(&mut self, grid: &Grid) -> Step {
        let Some(current) = self.stack.pop() else {
            return Step::Continue(0);
        };
        self.on_stack.remove(&current);

        if current == self.target {
            return Step::Found {
                path: reconstruct_path(&self.came_from, current),
                expanded: 0,
            };
        }
        if !self.explored.insert(current) {
            return Step::Continue(0);
        }

        for neighbor in grid.neighbors(current).into_iter().rev() {
            if !self.explored.contains(&neighbor) && self.on_stack.insert(neighbor) {
                self.stack.push(neighbor);
                self.came_from.insert(neighbor, current);
            }
        }
        Step::Continue(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{Algorithm, SearchEngine};
    use crate::obstacles::ObstacleSpawner;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// Cells added to the explored set between consecutive snapshots.
    fn expansion_order(engine: &SearchEngine<'_>) -> Vec<Position> {
        let snapshots: Vec<_> = engine.history().iter().collect();
        snapshots
            .windows(2)
            .flat_map(|w| w[1].explored.difference(&w[0].explored).copied().collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn open_three_by_three_follows_direction_order() {
        let mut grid: Grid = "S..\n...\n..T".parse().unwrap();
        let mut engine = SearchEngine::new(&mut grid, ObstacleSpawner::disabled());

        assert!(engine.run(Algorithm::DepthFirst));
        assert_eq!(expansion_order(&engine), vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2)]);
        assert_eq!(engine.path(), &[p(0, 0), p(0, 1), p(1, 2), p(2, 2)]);
        assert_eq!(engine.history().len(), 5);

        let history = engine.history();
        assert_eq!(history.get(0).unwrap().frontier, vec![p(0, 0)]);
        assert_eq!(history.get(1).unwrap().frontier, vec![p(0, 1), p(1, 1), p(1, 0)]);
        assert_eq!(
            history.get(4).unwrap().frontier,
            vec![p(2, 2), p(2, 1), p(1, 1), p(1, 0)]
        );
    }

    #[test]
    fn walled_off_target_exhausts_the_top_row() {
        let mut grid: Grid = "
            .S.
            ###
            ..T
        "
        .parse()
        .unwrap();
        let mut engine = SearchEngine::new(&mut grid, ObstacleSpawner::disabled());
        assert!(!engine.run(Algorithm::DepthFirst));
        assert!(engine.path().is_empty());
        assert_eq!(engine.expansions(), 3);
    }
}
