//! # Move Validation Module
//!
//! Translates a player's raw move request into a concrete board position
//! or rejects it with a specific reason. Validation never mutates the
//! board; on success the controller applies the resolved position.

use crate::board::{Board, GameConfig, Position};
use std::fmt;

/// A move request as produced by input parsing, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawMove {
    /// Free placement: target a cell directly by coordinate.
    Cell { row: usize, col: usize },
    /// Gravity drop: choose a column; the piece settles into its lowest
    /// open row. The optional `row` is the row the player claims the
    /// piece will land in, kept from the source game's input format, and
    /// must match the computed landing row when present.
    Drop { col: usize, row: Option<usize> },
}

/// Why a move request was turned away
///
/// Every rejection is a pure return value surfaced to the caller for
/// re-prompting; none of them change the board or the match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reject {
    /// Raw input could not be parsed, or the move encoding does not
    /// match the board's placement mode
    InvalidFormat,
    /// Referenced row or column lies outside the board
    OutOfBounds,
    /// Target cell already holds a mark (free placement)
    CellOccupied,
    /// Target column has no open cell (gravity)
    ColumnFull,
    /// Stated row differs from the column's computed landing row (gravity)
    RowMismatch,
    /// The match has already ended in a win or draw
    MatchOver,
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reject::InvalidFormat => write!(f, "Input could not be understood"),
            Reject::OutOfBounds => write!(f, "Row or column is off the board"),
            Reject::CellOccupied => write!(f, "That cell is already taken"),
            Reject::ColumnFull => write!(f, "That column is full"),
            Reject::RowMismatch => write!(f, "Stated row is not the landing row for that column"),
            Reject::MatchOver => write!(f, "The match is already over"),
        }
    }
}

impl std::error::Error for Reject {}

/// Resolves raw move requests against the current board.
#[derive(Debug, Clone, Copy)]
pub struct MoveValidator {
    config: GameConfig,
}

impl MoveValidator {
    pub fn new(config: GameConfig) -> Self {
        MoveValidator { config }
    }

    /// Resolves a raw move to the concrete position it would occupy, or
    /// rejects it. The board is only read, never written.
    pub fn resolve(&self, board: &Board, raw: &RawMove) -> Result<Position, Reject> {
        match (*raw, self.config.gravity) {
            (RawMove::Cell { row, col }, false) => {
                let pos = Position { row, col };
                if !board.in_bounds(pos) {
                    return Err(Reject::OutOfBounds);
                }
                if board.cell(pos).is_some() {
                    return Err(Reject::CellOccupied);
                }
                Ok(pos)
            }
            (RawMove::Drop { col, row }, true) => {
                if col >= board.cols() {
                    return Err(Reject::OutOfBounds);
                }
                let landing = board.lowest_open_row(col).ok_or(Reject::ColumnFull)?;
                // The stated row is redundant with the column, but the
                // source game required it to match exactly.
                if let Some(stated) = row {
                    if stated >= board.rows() {
                        return Err(Reject::OutOfBounds);
                    }
                    if stated != landing {
                        return Err(Reject::RowMismatch);
                    }
                }
                Ok(Position { row: landing, col })
            }
            // Wrong encoding for this board's placement mode.
            _ => Err(Reject::InvalidFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    fn free_3x3() -> GameConfig {
        GameConfig {
            rows: 3,
            cols: 3,
            win_length: 3,
            gravity: false,
        }
    }

    fn gravity_6x7() -> GameConfig {
        GameConfig {
            rows: 6,
            cols: 7,
            win_length: 4,
            gravity: true,
        }
    }

    #[test]
    fn test_free_placement_accepts_empty_in_bounds_cell() {
        let config = free_3x3();
        let board = Board::new(&config);
        let validator = MoveValidator::new(config);
        let pos = validator
            .resolve(&board, &RawMove::Cell { row: 1, col: 1 })
            .unwrap();
        assert_eq!(pos, Position { row: 1, col: 1 });
    }

    #[test]
    fn test_free_placement_rejections() {
        let config = free_3x3();
        let mut board = Board::new(&config);
        board.place(Position { row: 0, col: 0 }, Mark::X);
        let validator = MoveValidator::new(config);

        assert_eq!(
            validator.resolve(&board, &RawMove::Cell { row: 3, col: 0 }),
            Err(Reject::OutOfBounds)
        );
        assert_eq!(
            validator.resolve(&board, &RawMove::Cell { row: 0, col: 0 }),
            Err(Reject::CellOccupied)
        );
    }

    #[test]
    fn test_drop_lands_on_lowest_open_row() {
        let config = gravity_6x7();
        let mut board = Board::new(&config);
        board.place(Position { row: 0, col: 2 }, Mark::X);
        let validator = MoveValidator::new(config);

        let pos = validator
            .resolve(&board, &RawMove::Drop { col: 2, row: None })
            .unwrap();
        assert_eq!(pos, Position { row: 1, col: 2 });
    }

    #[test]
    fn test_drop_row_mismatch() {
        let config = gravity_6x7();
        let board = Board::new(&config);
        let validator = MoveValidator::new(config);

        assert_eq!(
            validator.resolve(&board, &RawMove::Drop { col: 0, row: Some(3) }),
            Err(Reject::RowMismatch)
        );
        assert_eq!(
            validator.resolve(&board, &RawMove::Drop { col: 0, row: Some(0) }),
            Ok(Position { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_drop_column_rejections() {
        let config = gravity_6x7();
        let mut board = Board::new(&config);
        for r in 0..6 {
            board.place(Position { row: r, col: 4 }, Mark::X);
        }
        let validator = MoveValidator::new(config);

        assert_eq!(
            validator.resolve(&board, &RawMove::Drop { col: 7, row: None }),
            Err(Reject::OutOfBounds)
        );
        assert_eq!(
            validator.resolve(&board, &RawMove::Drop { col: 4, row: None }),
            Err(Reject::ColumnFull)
        );
    }

    #[test]
    fn test_wrong_encoding_for_mode() {
        let free = free_3x3();
        let gravity = gravity_6x7();
        let free_board = Board::new(&free);
        let gravity_board = Board::new(&gravity);

        assert_eq!(
            MoveValidator::new(free).resolve(&free_board, &RawMove::Drop { col: 0, row: None }),
            Err(Reject::InvalidFormat)
        );
        assert_eq!(
            MoveValidator::new(gravity)
                .resolve(&gravity_board, &RawMove::Cell { row: 0, col: 0 }),
            Err(Reject::InvalidFormat)
        );
    }
}
