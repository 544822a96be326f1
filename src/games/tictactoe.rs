//! Tic-tac-toe: 3x3 free placement, three in a row to win.
//!
//! Moves are entered as `row,col` with 0-indexed coordinates, the format
//! the original prompt asked for.

use crate::board::GameConfig;
use crate::validator::{RawMove, Reject};
use std::fmt;
use std::str::FromStr;

impl GameConfig {
    /// The 3x3 free-placement preset.
    pub fn tic_tac_toe() -> Self {
        GameConfig {
            rows: 3,
            cols: 3,
            win_length: 3,
            gravity: false,
        }
    }
}

/// A tic-tac-toe move: (row, column), 0-indexed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TicTacToeMove(pub usize, pub usize);

impl From<TicTacToeMove> for RawMove {
    fn from(mv: TicTacToeMove) -> RawMove {
        RawMove::Cell {
            row: mv.0,
            col: mv.1,
        }
    }
}

impl fmt::Display for TicTacToeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

impl FromStr for TicTacToeMove {
    type Err = Reject;

    /// Parses `"row,col"`, e.g. `"0,2"` for the top-right cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').ok_or(Reject::InvalidFormat)?;
        let row = row.trim().parse::<usize>().map_err(|_| Reject::InvalidFormat)?;
        let col = col.trim().parse::<usize>().map_err(|_| Reject::InvalidFormat)?;
        Ok(TicTacToeMove(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        let mv = TicTacToeMove::from_str("1, 2").unwrap();
        assert_eq!(mv, TicTacToeMove(1, 2));
        assert_eq!(RawMove::from(mv), RawMove::Cell { row: 1, col: 2 });
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(TicTacToeMove::from_str("12"), Err(Reject::InvalidFormat));
        assert_eq!(TicTacToeMove::from_str("a,b"), Err(Reject::InvalidFormat));
        assert_eq!(TicTacToeMove::from_str(""), Err(Reject::InvalidFormat));
        assert_eq!(TicTacToeMove::from_str("1,2,3"), Err(Reject::InvalidFormat));
    }

    #[test]
    fn test_display_matches_input_notation() {
        assert_eq!(TicTacToeMove(0, 2).to_string(), "0,2");
    }

    #[test]
    fn test_preset_shape() {
        let config = GameConfig::tic_tac_toe();
        assert_eq!((config.rows, config.cols, config.win_length), (3, 3, 3));
        assert!(!config.gravity);
    }
}
