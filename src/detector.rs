//! Win detection over the board, delegating the actual scan to the
//! shared `line-scan` primitive.

use crate::board::{Board, GameConfig, Mark};

/// Answers whether a mark has completed a winning line.
#[derive(Debug, Clone, Copy)]
pub struct WinDetector {
    win_length: usize,
}

impl WinDetector {
    pub fn new(config: GameConfig) -> Self {
        WinDetector {
            win_length: config.win_length,
        }
    }

    /// Returns true iff `mark` occupies an unbroken line of the
    /// configured length in any of the four scan directions.
    pub fn has_won(&self, board: &Board, mark: Mark) -> bool {
        line_scan::has_run(
            board.cells(),
            board.rows(),
            board.cols(),
            Some(mark),
            self.win_length,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    fn board_with(config: &GameConfig, marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new(config);
        for &(row, col, mark) in marks {
            board.place(Position { row, col }, mark);
        }
        board
    }

    #[test]
    fn test_row_win_on_3x3() {
        let config = GameConfig {
            rows: 3,
            cols: 3,
            win_length: 3,
            gravity: false,
        };
        let board = board_with(
            &config,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::X),
                (0, 2, Mark::X),
                (1, 0, Mark::O),
                (1, 1, Mark::O),
            ],
        );
        let detector = WinDetector::new(config);
        assert!(detector.has_won(&board, Mark::X));
        assert!(!detector.has_won(&board, Mark::O));
    }

    #[test]
    fn test_both_diagonals_on_3x3() {
        let config = GameConfig {
            rows: 3,
            cols: 3,
            win_length: 3,
            gravity: false,
        };
        let detector = WinDetector::new(config);

        let main_diag = board_with(
            &config,
            &[(0, 0, Mark::O), (1, 1, Mark::O), (2, 2, Mark::O)],
        );
        assert!(detector.has_won(&main_diag, Mark::O));

        let anti_diag = board_with(
            &config,
            &[(0, 2, Mark::X), (1, 1, Mark::X), (2, 0, Mark::X)],
        );
        assert!(detector.has_won(&anti_diag, Mark::X));
    }

    #[test]
    fn test_window_win_on_gravity_board() {
        let config = GameConfig {
            rows: 6,
            cols: 7,
            win_length: 4,
            gravity: true,
        };
        // four stacked in column 2, rows 1..=4: a sliding vertical window
        let board = board_with(
            &config,
            &[
                (0, 2, Mark::O),
                (1, 2, Mark::X),
                (2, 2, Mark::X),
                (3, 2, Mark::X),
                (4, 2, Mark::X),
            ],
        );
        let detector = WinDetector::new(config);
        assert!(detector.has_won(&board, Mark::X));
        assert!(!detector.has_won(&board, Mark::O));
    }

    #[test]
    fn test_oversized_win_length_never_wins() {
        // a win length that cannot fit on the board must never report a
        // win, even when it would truncate to a small value in 32 bits
        let config = GameConfig {
            rows: 3,
            cols: 3,
            win_length: (u32::MAX as usize) + 4,
            gravity: false,
        };
        let board = board_with(
            &config,
            &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)],
        );
        let detector = WinDetector::new(config);
        assert!(!detector.has_won(&board, Mark::X));
    }

    #[test]
    fn test_three_in_a_row_is_not_enough_for_four() {
        let config = GameConfig {
            rows: 6,
            cols: 7,
            win_length: 4,
            gravity: true,
        };
        let board = board_with(
            &config,
            &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)],
        );
        let detector = WinDetector::new(config);
        assert!(!detector.has_won(&board, Mark::X));
    }
}
