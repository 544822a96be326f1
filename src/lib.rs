//! # Grid Duel - Configurable Two-Player Grid Game Engine
//!
//! A single game-state machine covers every two-player grid game whose
//! rules reduce to "place a mark, look for a straight line of a given
//! length": board representation, move validation, win detection, and
//! turn progression.
//!
//! Per-game behavior comes from [`GameConfig`] (dimensions, win length,
//! free or gravity placement), never from per-game code paths. Two
//! presets cover the classic shapes: [`GameConfig::tic_tac_toe`] and
//! [`GameConfig::connect_four`].
//!
//! The engine is synchronous and single-threaded; every operation is a
//! bounded computation. Prompting, parsing, and rendering live in the
//! outer shell (the `play` binary), which drives the engine through
//! [`GameController::apply_move`] and the read-only accessors.

pub mod board;
pub mod controller;
pub mod detector;
pub mod games;
pub mod validator;

pub use board::{Board, GameConfig, Mark, Position};
pub use controller::{GameController, MatchState, MoveReceipt};
pub use detector::WinDetector;
pub use validator::{MoveValidator, RawMove, Reject};
