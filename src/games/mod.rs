//! # Game Presets Module
//!
//! One engine, parameterized by [`GameConfig`](crate::GameConfig), covers
//! every supported game; these modules supply the configuration presets
//! and the move notation each game uses at the prompt.
//!
//! ## Supported games
//! - **Tic-tac-toe**: 3x3 free placement, three in a row to win
//! - **Connect four**: 7-column by 6-row gravity board, four in a row to win
//!
//! ## Adding a new game
//! Supply a new `GameConfig` constructor and, if the game has its own
//! input notation, a move type with a `FromStr` impl that lowers into
//! [`RawMove`](crate::RawMove). No new engine code paths are needed.

pub mod connect4;
pub mod tictactoe;
