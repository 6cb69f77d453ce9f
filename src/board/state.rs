use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::types::square::{self, BOARD_SIZE, NUM_SQUARES};
use super::types::{decode, Color, Piece, PieceKind, PowerUp};

const BACK_RANK: [char; BOARD_SIZE] = ['r', 'n', 'b', 'q', 'k', 'b', 'n', 'r'];

/// A snapshot of the 64 squares.
///
/// Every edit returns a new board; the move queries only ever borrow one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Option<Piece>>", into = "Vec<Option<Piece>>")
)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|_| None),
        }
    }

    /// The usual starting array: White on rows 0 and 1, Black on rows 6 and 7.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.set(square::from_row_col(0, col), Some(decode(&format!("w{kind}"))));
            board.set(square::from_row_col(1, col), Some(decode("wp")));
            board.set(square::from_row_col(6, col), Some(decode("bp")));
            board.set(square::from_row_col(7, col), Some(decode(&format!("b{kind}"))));
        }
        board
    }

    /// Piece on `idx`, `None` when the square is empty or off the board.
    #[inline]
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Piece> {
        self.squares.get(idx).and_then(Option::as_ref)
    }

    /// Piece on a signed candidate square; off-board candidates are empty.
    #[inline]
    pub(crate) fn at(&self, candidate: isize) -> Option<&Piece> {
        square::on_board(candidate).and_then(|idx| self.get(idx))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, idx: usize) -> bool {
        self.get(idx).is_none()
    }

    /// Occupied squares in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, sq)| sq.as_ref().map(|piece| (idx, piece)))
    }

    /// First square holding a king of `color`.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<usize> {
        self.occupied()
            .find(|(_, piece)| piece.is_king_of(color))
            .map(|(idx, _)| idx)
    }

    pub(crate) fn set(&mut self, idx: usize, piece: Option<Piece>) {
        if let Some(slot) = self.squares.get_mut(idx) {
            *slot = piece;
        }
    }

    /// Copy of the board with the occupant of `from` moved to `to`.
    pub(crate) fn relocated(&self, from: usize, to: usize) -> Board {
        let mut next = self.clone();
        if from < NUM_SQUARES && to < NUM_SQUARES {
            let piece = next.squares[from].take();
            next.squares[to] = piece;
        }
        next
    }

    /// Apply a move without validating it and mark the moved piece.
    ///
    /// Whatever stood on `to` is replaced. Out-of-range squares or an empty
    /// `from` leave the copy unchanged.
    #[must_use]
    pub fn with_move(&self, from: usize, to: usize) -> Board {
        if self.is_empty(from) || to >= NUM_SQUARES {
            return self.clone();
        }
        let mut next = self.relocated(from, to);
        if let Some(piece) = next.squares[to].as_mut() {
            piece.has_moved = true;
        }
        next
    }

    /// Copy of the board with `piece` placed on `idx`.
    #[must_use]
    pub fn with_piece(&self, idx: usize, piece: Piece) -> Board {
        let mut next = self.clone();
        next.set(idx, Some(piece));
        next
    }

    /// Copy of the board with `idx` cleared.
    #[must_use]
    pub fn without_piece(&self, idx: usize) -> Board {
        let mut next = self.clone();
        next.set(idx, None);
        next
    }

    /// Copy of the board with `power_up` given to the occupant of `idx`.
    /// Empty squares are left alone.
    #[must_use]
    pub fn with_power_up(&self, idx: usize, power_up: PowerUp) -> Board {
        let mut next = self.clone();
        if let Some(piece) = next.squares.get_mut(idx).and_then(Option::as_mut) {
            piece.power_ups.push(power_up);
        }
        next
    }

    /// Copy of the board with every power-up removed from the occupant of `idx`.
    #[must_use]
    pub fn without_power_ups(&self, idx: usize) -> Board {
        let mut next = self.clone();
        if let Some(piece) = next.squares.get_mut(idx).and_then(Option::as_mut) {
            piece.power_ups.clear();
        }
        next
    }
}

impl Index<usize> for Board {
    type Output = Option<Piece>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.squares[idx]
    }
}

impl TryFrom<Vec<Option<Piece>>> for Board {
    type Error = BoardError;

    fn try_from(squares: Vec<Option<Piece>>) -> Result<Self, Self::Error> {
        let found = squares.len();
        let squares: [Option<Piece>; NUM_SQUARES] = squares
            .try_into()
            .map_err(|_| BoardError::WrongLength { found })?;
        Ok(Board { squares })
    }
}

impl From<Board> for Vec<Option<Piece>> {
    fn from(board: Board) -> Self {
        board.squares.into()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..BOARD_SIZE {
                let ch = match self.get(square::from_row_col(row, col)) {
                    Some(piece) => placement_char(piece),
                    None => ' ',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

/// Uppercase for White, lowercase for Black, `?` for `Blank`.
pub(crate) fn placement_char(piece: &Piece) -> char {
    match piece.kind.to_code_char() {
        Some(c) if piece.color == Color::White => c.to_ascii_uppercase(),
        Some(c) => c,
        None => {
            debug_assert_eq!(piece.kind, PieceKind::Blank);
            '?'
        }
    }
}
