use crate::grid::Position;
use thiserror::Error;

/// Errors raised while building or mutating a [`Grid`](crate::grid::Grid).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("{role} {pos} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        role: &'static str,
        pos: Position,
        rows: usize,
        cols: usize,
    },

    #[error("start and target both occupy {0}")]
    StartIsTarget(Position),

    #[error("{role} {pos} is covered by a wall")]
    BlockedEndpoint { role: &'static str, pos: Position },

    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("unknown layout symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("layout has {count} {role} cells, expected exactly one")]
    EndpointCount { role: &'static str, count: usize },
}

/// Errors raised while interpreting command line settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownAlgorithm(#[from] ParseAlgorithmError),

    #[error("grid of {rows}x{cols} is too small for the default endpoints; pass --start and --target")]
    NoDefaultEndpoints { rows: usize, cols: usize },

    #[error("{name} must lie in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected a position as `row,col`, got {0:?}")]
pub struct ParsePositionError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?}; choose bfs, dfs, ucs, dls, iddfs, bidirectional or all")]
pub struct ParseAlgorithmError(pub String);
