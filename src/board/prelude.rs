//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use powerup_chess::board::prelude::*;
//!
//! let board = Board::standard();
//! assert!(validate_move(12, 28, &board));
//! ```

pub use super::{
    capture_moves, decode, is_in_check, moves, validate_move, Board, BoardBuilder, Color,
    DefenderStrategy, EdgePolicy, MoveError, Piece, PieceKind, PowerUp, PowerUpKind, Rules,
    Shield,
};
