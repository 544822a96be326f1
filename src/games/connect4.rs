//! Connect four: 7-column by 6-row gravity board, four in a row to win.
//!
//! Moves are entered as a column letter followed by a row number, e.g.
//! `a1`, the original game's notation: columns run `a..g` left to right
//! and rows are numbered from 1 at the bottom. The row is redundant
//! (gravity picks it) but the original required it to equal the landing
//! row, so it is carried through and checked. A bare column letter is
//! also accepted.

use crate::board::GameConfig;
use crate::validator::{RawMove, Reject};
use std::fmt;
use std::str::FromStr;

impl GameConfig {
    /// The classic 6-row by 7-column gravity preset.
    pub fn connect_four() -> Self {
        GameConfig {
            rows: 6,
            cols: 7,
            win_length: 4,
            gravity: true,
        }
    }
}

/// A connect-four move: a 0-indexed column, optionally with the
/// 0-indexed row the player claims the piece will land in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ConnectFourMove {
    pub col: usize,
    pub row: Option<usize>,
}

impl From<ConnectFourMove> for RawMove {
    fn from(mv: ConnectFourMove) -> RawMove {
        RawMove::Drop {
            col: mv.col,
            row: mv.row,
        }
    }
}

impl fmt::Display for ConnectFourMove {
    /// Renders the original notation: column letter, then the 1-based
    /// row if one is attached (`a1`, or just `d`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'a' + self.col as u8) as char;
        match self.row {
            Some(row) => write!(f, "{}{}", letter, row + 1),
            None => write!(f, "{}", letter),
        }
    }
}

impl FromStr for ConnectFourMove {
    type Err = Reject;

    /// Parses `"a1"` (column letter + 1-based row number) or a bare
    /// column letter like `"d"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(Reject::InvalidFormat)?;
        if !letter.is_ascii_alphabetic() {
            return Err(Reject::InvalidFormat);
        }
        let col = (letter.to_ascii_lowercase() as u8 - b'a') as usize;

        let rest = chars.as_str();
        let row = if rest.is_empty() {
            None
        } else {
            let number = rest.parse::<usize>().map_err(|_| Reject::InvalidFormat)?;
            // rows are numbered from 1 at the bottom
            Some(number.checked_sub(1).ok_or(Reject::InvalidFormat)?)
        };
        Ok(ConnectFourMove { col, row })
    }
}
