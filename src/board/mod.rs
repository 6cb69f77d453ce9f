//! Board representation and move rules.
//!
//! A [`Board`] is 64 optional pieces indexed 0..63. [`Rules`] generates the
//! legal destinations for a square: per-piece generators produce raw
//! candidates, the bounds filter removes off-board and friendly squares, and
//! the configured defender strategies veto captures (a Shield power-up makes
//! its holder uncapturable). King moves are additionally checked against the
//! resulting position so a king never steps into check.
//!
//! # Example
//! ```
//! use powerup_chess::board::{moves, Board};
//!
//! let board = Board::standard();
//! // White pawn on e2
//! assert_eq!(moves(12, &board), vec![20, 28]);
//! ```

mod builder;
mod error;
mod fen;
mod filters;
mod movegen;
pub mod prelude;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, MoveError, PieceCodeError, SquareError};
pub use filters::{apply_defender_strategies, filter_bounds, DefenderStrategy, Shield};
pub use movegen::{capture_moves, is_in_check, moves, validate_move};
pub use rules::Rules;
pub use state::Board;
pub use types::square;
pub use types::{decode, Color, EdgePolicy, Piece, PieceKind, PowerUp, PowerUpKind};
