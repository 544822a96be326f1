//! # Board Module - Grid State and Placement Rules
//!
//! This module holds the pure data side of the engine: the marks players
//! place, positions on the grid, the immutable per-match configuration,
//! and the mutable board itself.
//!
//! The board is a fixed-size rectangular grid stored as a flat row-major
//! vector. Indexing is 0-based throughout. For gravity boards, row 0 is
//! the bottom row, so the landing row of a dropped piece is the smallest
//! empty row index in its column.

use std::fmt;

/// A player's token. Exactly two players exist and `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A (row, column) pair, 0-indexed. Always bounds-checked against the
/// board before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Immutable per-match configuration
///
/// A single engine parameterized by this struct covers both observed game
/// shapes; new grid games are added by supplying a new configuration, not
/// new code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board height (number of rows)
    pub rows: usize,
    /// Board width (number of columns)
    pub cols: usize,
    /// Number of consecutive same-mark cells needed to win
    pub win_length: usize,
    /// true: pieces fall to the lowest open row of a chosen column;
    /// false: any empty cell may be targeted directly by coordinate
    pub gravity: bool,
}

/// The mutable grid of one match
///
/// Cells are `Option<Mark>` (`None` = empty) in a flat row-major vector.
/// Each cell is written at most once per match: mutation goes through
/// [`Board::place`] only, and the caller must have resolved the position
/// through move validation first.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Option<Mark>>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Creates an empty board with the configured dimensions.
    pub fn new(config: &GameConfig) -> Self {
        Board {
            cells: vec![None; config.rows * config.cols],
            rows: config.rows,
            cols: config.cols,
        }
    }

    /// Board height (number of rows)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width (number of columns)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true iff the position lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Current mark at a position, `None` if that cell is untouched.
    ///
    /// # Panics
    /// Panics if the position is out of bounds; callers validate first.
    pub fn cell(&self, pos: Position) -> Option<Mark> {
        assert!(self.in_bounds(pos), "position off the board: {pos:?}");
        self.cells[pos.row * self.cols + pos.col]
    }

    /// Writes `mark` into an empty cell.
    ///
    /// Precondition (enforced by move validation, asserted here): the
    /// position is in bounds and currently empty. Violating it is a
    /// contract bug in the caller, not a recoverable condition.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        assert!(self.in_bounds(pos), "position off the board: {pos:?}");
        let slot = &mut self.cells[pos.row * self.cols + pos.col];
        assert!(slot.is_none(), "cell already occupied: {pos:?}");
        *slot = Some(mark);
    }

    /// Returns true iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Smallest empty row index in a column, or `None` if the column is
    /// full. Only meaningful on gravity boards, where row 0 is the bottom.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&r| self.cells[r * self.cols + col].is_none())
    }

    /// Columns that can still receive a drop, paired with the landing row
    /// of each. Used by the shell to list available positions.
    pub fn open_columns(&self) -> Vec<(usize, usize)> {
        (0..self.cols)
            .filter_map(|c| self.lowest_open_row(c).map(|r| (c, r)))
            .collect()
    }

    /// The grid as a flat row-major slice, for line scanning.
    pub(crate) fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let symbol = match self.cells[r * self.cols + c] {
                    Some(mark) => mark.to_string(),
                    None => ".".to_string(),
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
