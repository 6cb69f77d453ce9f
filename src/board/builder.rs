//! Fluent builder for constructing boards.
//!
//! Allows creating positions piece by piece rather than parsing a placement
//! string, including power-ups which have no text form.
//!
//! # Example
//! ```
//! use powerup_chess::{BoardBuilder, PowerUp};
//!
//! let board = BoardBuilder::new()
//!     .code(4, "wk")
//!     .code(60, "bk")
//!     .code(12, "wp")
//!     .power_up(12, PowerUp::shield())
//!     .build();
//! assert_eq!(board.occupied().count(), 3);
//! ```

use super::types::{decode, Piece, PowerUp};
use super::Board;

/// A fluent builder for constructing `Board` values.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(usize, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial array.
    #[must_use]
    pub fn standard() -> Self {
        let pieces = Board::standard()
            .occupied()
            .map(|(idx, piece)| (idx, piece.clone()))
            .collect();
        BoardBuilder { pieces }
    }

    /// Place a piece, replacing any piece already on that square.
    #[must_use]
    pub fn piece(mut self, idx: usize, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != idx);
        self.pieces.push((idx, piece));
        self
    }

    /// Place the piece a two-character code decodes to.
    #[must_use]
    pub fn code(self, idx: usize, code: &str) -> Self {
        self.piece(idx, decode(code))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, idx: usize) -> Self {
        self.pieces.retain(|(sq, _)| *sq != idx);
        self
    }

    /// Give a power-up to the piece on `idx`. Ignored for empty squares.
    #[must_use]
    pub fn power_up(mut self, idx: usize, power_up: PowerUp) -> Self {
        if let Some((_, piece)) = self.pieces.iter_mut().find(|(sq, _)| *sq == idx) {
            piece.power_ups.push(power_up);
        }
        self
    }

    /// Build the board. Squares outside 0..63 are skipped.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (idx, piece) in self.pieces {
            board.set(idx, Some(piece));
        }
        board
    }
}
