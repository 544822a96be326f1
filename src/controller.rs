//! # Game Controller Module - Turn State Machine
//!
//! The `GameController` is the single source of truth for a match. All
//! moves pass through it: it delegates resolution to the validator,
//! mutates the board on acceptance, queries win detection and fullness,
//! and advances the turn. Rejected moves change nothing.
//!
//! The outer shell owns input and rendering; the controller exposes a
//! synchronous `apply_move` plus read-only accessors for the renderer.

use crate::board::{Board, GameConfig, Mark, Position};
use crate::detector::WinDetector;
use crate::validator::{MoveValidator, RawMove, Reject};

/// Where the match stands
///
/// `Won` and `Draw` are terminal; no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Match is still running; the contained mark moves next.
    InProgress(Mark),
    /// The contained mark completed a winning line.
    Won(Mark),
    /// The board filled with no winner.
    Draw,
}

impl MatchState {
    /// Check if the match has reached a terminal state
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchState::InProgress(_))
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReceipt {
    /// The cell the piece ended up in
    pub position: Position,
    /// The mark that was placed
    pub mark: Mark,
    /// The match state after the move
    pub state: MatchState,
}

/// The turn state machine of one match
///
/// # Usage
/// ```
/// use grid_duel::{GameConfig, GameController, RawMove};
///
/// let mut game = GameController::new(GameConfig::tic_tac_toe());
/// match game.apply_move(&RawMove::Cell { row: 0, col: 0 }) {
///     Ok(receipt) => println!("{} placed at {:?}", receipt.mark, receipt.position),
///     Err(reason) => println!("rejected: {}", reason),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    board: Board,
    validator: MoveValidator,
    detector: WinDetector,
    state: MatchState,
    moves_made: usize,
}

impl GameController {
    /// Starts a fresh match with an empty board; `X` moves first.
    pub fn new(config: GameConfig) -> Self {
        GameController {
            config,
            board: Board::new(&config),
            validator: MoveValidator::new(config),
            detector: WinDetector::new(config),
            state: MatchState::InProgress(Mark::X),
            moves_made: 0,
        }
    }

    /// The only mutating entry point.
    ///
    /// Validates the raw move, applies it, and advances the state
    /// machine. On rejection nothing changes and the specific reason is
    /// returned; calling after the match has ended rejects with
    /// [`Reject::MatchOver`].
    pub fn apply_move(&mut self, raw: &RawMove) -> Result<MoveReceipt, Reject> {
        let mark = match self.state {
            MatchState::InProgress(mark) => mark,
            _ => return Err(Reject::MatchOver),
        };

        let position = self.validator.resolve(&self.board, raw)?;
        self.board.place(position, mark);
        self.moves_made += 1;

        self.state = if self.detector.has_won(&self.board, mark) {
            MatchState::Won(mark)
        } else if self.board.is_full() {
            MatchState::Draw
        } else {
            MatchState::InProgress(mark.other())
        };

        Ok(MoveReceipt {
            position,
            mark,
            state: self.state,
        })
    }

    /// Current match state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Read-only view of the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configuration this match was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of accepted moves so far.
    pub fn move_count(&self) -> usize {
        self.moves_made
    }
}
