use crate::grid::Position;
use std::collections::HashMap;
use std::hash::BuildHasher;

pub const STRAIGHT_COST: f64 = 1.0;
/// Approximation of the square root of two used for diagonal moves.
pub const DIAGONAL_COST: f64 = 1.414;

/// Walks parent links back from `node` until a cell without a parent (the
/// root of the search) and returns the cells in root-to-`node` order.
///
/// The parent map must be acyclic, which every search here guarantees by
/// assigning a parent before the child is expanded.
pub fn reconstruct_path<S: BuildHasher>(
    came_from: &HashMap<Position, Position, S>,
    node: Position,
) -> Vec<Position> {
    let mut path = vec![node];
    let mut current = node;
    while let Some(&parent) = came_from.get(&current) {
        debug_assert!(path.len() <= came_from.len(), "cycle in parent map");
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

pub fn move_cost(from: Position, to: Position) -> f64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    }
}

/// Sum of straight and diagonal move costs along `path`.
pub fn path_cost(path: &[Position]) -> f64 {
    path.windows(2).map(|w| move_cost(w[0], w[1])).sum()
}
