//! FEN-style piece placement text for boards.
//!
//! Only the placement field is supported: ranks from 8 down to 1 separated by
//! `/`, uppercase for White, digits for runs of empty squares. Power-ups and
//! `has_moved` have no text form and are dropped.

use std::fmt::Write as _;
use std::str::FromStr;

use super::error::BoardError;
use super::state::placement_char;
use super::types::square::{self, BOARD_SIZE};
use super::types::{Color, Piece, PieceKind};
use super::Board;

impl Board {
    /// Parse a placement string such as
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    pub fn from_placement(placement: &str) -> Result<Self, BoardError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(BoardError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = BOARD_SIZE - 1 - rank_idx;
            let rank = row + 1;
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                    continue;
                }
                let kind = PieceKind::from_code_char(c.to_ascii_lowercase());
                if kind == PieceKind::Blank {
                    return Err(BoardError::InvalidPiece { char: c });
                }
                if col >= BOARD_SIZE {
                    return Err(BoardError::WrongFileCount {
                        rank,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set(square::from_row_col(row, col), Some(Piece::new(color, kind)));
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(BoardError::WrongFileCount { rank, files: col });
            }
        }
        Ok(board)
    }

    /// Placement string for this board.
    ///
    /// `Blank` pieces are written as `?`, which [`Board::from_placement`]
    /// rejects, so a board holding one does not round-trip. Power-ups and
    /// `has_moved` are dropped as well.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in (0..BOARD_SIZE).rev() {
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                match self.get(square::from_row_col(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            let _ = write!(out, "{empty}");
                            empty = 0;
                        }
                        out.push(placement_char(piece));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(out, "{empty}");
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s)
    }
}
