use crate::error::{GridError, ParsePositionError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// The cell one step away in `direction`, or `None` when that step
    /// would leave the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// True when `other` is one of the eight cells around `self`.
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    pub fn is_diagonal_to(self, other: Position) -> bool {
        self.row != other.row && self.col != other.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `row,col`, tolerating surrounding parentheses and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        Ok(Position {
            row: row.trim().parse().map_err(|_| err())?,
            col: col.trim().parse().map_err(|_| err())?,
        })
    }
}

/// The eight movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// Neighbor enumeration order. Depth-first variants push in reverse so
    /// that `Up` is expanded first, which makes their histories depend on it.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// `(row, col)` delta.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::Down => (1, 0),
            Direction::DownLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::UpLeft => (-1, -1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.offset();
        dr != 0 && dc != 0
    }
}

/// Rectangular world with a start, a target, static walls and the
/// obstacles spawned during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    start: Position,
    target: Position,
    walls: FxHashSet<Position>,
    obstacles: FxHashSet<Position>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, start: Position, target: Position) -> Result<Self, GridError> {
        Self::with_walls(rows, cols, start, target, FxHashSet::default())
    }

    /// Builds a grid and rejects layouts no search could start on: empty
    /// dimensions, endpoints out of bounds or on a wall, or `start == target`.
    pub fn with_walls(
        rows: usize,
        cols: usize,
        start: Position,
        target: Position,
        walls: FxHashSet<Position>,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        for (role, pos) in [("start", start), ("target", target)] {
            if pos.row >= rows || pos.col >= cols {
                return Err(GridError::OutOfBounds { role, pos, rows, cols });
            }
            if walls.contains(&pos) {
                return Err(GridError::BlockedEndpoint { role, pos });
            }
        }
        if start == target {
            return Err(GridError::StartIsTarget(start));
        }

        Ok(Grid {
            rows,
            cols,
            start,
            target,
            walls,
            obstacles: FxHashSet::default(),
        })
    }

    /// Start one cell in from the top-left corner, target one cell in from
    /// the bottom-right corner.
    pub fn with_default_endpoints(rows: usize, cols: usize) -> Result<Self, GridError> {
        let target = Position::new(rows.saturating_sub(2), cols.saturating_sub(2));
        Self::new(rows, cols, Position::new(1, 1), target)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn walls(&self) -> &FxHashSet<Position> {
        &self.walls
    }

    pub fn obstacles(&self) -> &FxHashSet<Position> {
        &self.obstacles
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }

    /// In bounds and neither a wall nor an obstacle.
    pub fn is_valid(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.is_wall(pos) && !self.is_obstacle(pos)
    }

    /// Valid neighbors of `pos` in [`Direction::ALL`] order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| pos.step(direction))
            .filter(|&next| self.is_valid(next))
            .collect()
    }

    /// Cells an obstacle may still be spawned on.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut cells = Vec::with_capacity(self.rows * self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Position::new(row, col);
                if pos != self.start && pos != self.target && self.is_valid(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    /// Independently turns every free cell other than the endpoints into a
    /// wall with the given probability. Existing walls are kept.
    pub fn generate_random_walls<R: Rng + ?Sized>(
        &mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Position::new(row, col);
                if pos == self.start || pos == self.target || self.is_obstacle(pos) {
                    continue;
                }
                if rng.gen_bool(probability) {
                    self.walls.insert(pos);
                }
            }
        }
        Ok(())
    }

    /// Replaces the wall set wholesale. Keeping the endpoints clear is the
    /// caller's job; a wall on either endpoint is only logged.
    pub fn set_walls(&mut self, walls: FxHashSet<Position>) {
        if walls.contains(&self.start) || walls.contains(&self.target) {
            tracing::warn!(
                start = %self.start,
                target = %self.target,
                "wall set covers an endpoint"
            );
        }
        self.walls = walls;
    }

    pub fn reset_obstacles(&mut self) {
        self.obstacles.clear();
    }

    /// Only the obstacle spawner adds obstacles, and only on empty cells.
    pub(crate) fn add_obstacle(&mut self, pos: Position) {
        debug_assert!(pos != self.start && pos != self.target && !self.is_wall(pos));
        self.obstacles.insert(pos);
    }

    /// Text rendering; `path` cells other than the endpoints are drawn as `*`.
    pub fn render(&self, path: &[Position]) -> String {
        let on_path: FxHashSet<Position> = path.iter().copied().collect();
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Position::new(row, col);
                let symbol = if pos == self.start {
                    'S'
                } else if pos == self.target {
                    'T'
                } else if self.is_wall(pos) {
                    '#'
                } else if self.is_obstacle(pos) {
                    'O'
                } else if on_path.contains(&pos) {
                    '*'
                } else {
                    '.'
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }

    /// Print the grid with an optional path overlay and a legend.
    pub fn print_grid(&self, path: &[Position]) {
        println!("Legend: S=Start, T=Target, #=Wall, O=Obstacle, *=Path, .=Empty");
        print!("{}", self.render(path));
        println!();
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a text layout, one line per row: `S` start, `T` target,
    /// `#` wall, `O` obstacle, `.` empty. Blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());

        let mut starts = Vec::new();
        let mut targets = Vec::new();
        let mut walls = FxHashSet::default();
        let mut obstacles = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedLayout { row, found, expected: cols });
            }
            for (col, symbol) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                match symbol {
                    '.' => {}
                    '#' => {
                        walls.insert(pos);
                    }
                    'O' => obstacles.push(pos),
                    'S' => starts.push(pos),
                    'T' => targets.push(pos),
                    _ => return Err(GridError::UnknownSymbol { symbol, row, col }),
                }
            }
        }

        let (start, target) = match (starts.as_slice(), targets.as_slice()) {
            ([start], [target]) => (*start, *target),
            ([_], _) => return Err(GridError::EndpointCount { role: "target", count: targets.len() }),
            _ => return Err(GridError::EndpointCount { role: "start", count: starts.len() }),
        };

        let mut grid = Grid::with_walls(rows, cols, start, target, walls)?;
        grid.obstacles.extend(obstacles);
        Ok(grid)
    }
}
