//! Square indices and board geometry.
//!
//! Squares are plain `usize` indices 0..63, row-major: `row = idx / 8`,
//! `col = idx % 8`. Row 0 is rank 1 and column 0 is file a, so White pawns
//! advance toward higher indices.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of squares on the board
pub const NUM_SQUARES: usize = 64;

/// Board width and height
pub const BOARD_SIZE: usize = 8;

#[inline]
#[must_use]
pub const fn row_of(idx: usize) -> usize {
    idx / BOARD_SIZE
}

#[inline]
#[must_use]
pub const fn col_of(idx: usize) -> usize {
    idx % BOARD_SIZE
}

#[inline]
#[must_use]
pub const fn from_row_col(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

/// Returns the index when `candidate` lies on the board.
#[inline]
#[must_use]
pub fn on_board(candidate: isize) -> Option<usize> {
    usize::try_from(candidate)
        .ok()
        .filter(|&idx| idx < NUM_SQUARES)
}

/// Algebraic name of a square, e.g. `0 -> "a1"`, `63 -> "h8"`.
#[must_use]
pub fn name(idx: usize) -> String {
    format!(
        "{}{}",
        (col_of(idx) as u8 + b'a') as char,
        row_of(idx) + 1
    )
}

/// Parse algebraic notation (`"e4"`) into a square index.
pub fn parse(notation: &str) -> Result<usize, SquareError> {
    let chars: Vec<char> = notation.chars().collect();
    let invalid = || SquareError::InvalidNotation {
        notation: notation.to_string(),
    };
    if chars.len() != 2 {
        return Err(invalid());
    }
    let col = match chars[0] {
        'a'..='h' => chars[0] as usize - 'a' as usize,
        _ => return Err(invalid()),
    };
    let row = match chars[1] {
        '1'..='8' => chars[1] as usize - '1' as usize,
        _ => return Err(invalid()),
    };
    Ok(from_row_col(row, col))
}

/// Checks that an index names a board square.
pub fn check(idx: usize) -> Result<usize, SquareError> {
    if idx < NUM_SQUARES {
        Ok(idx)
    } else {
        Err(SquareError::OutOfRange { index: idx })
    }
}

/// How a step that crosses the a/h file edge is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EdgePolicy {
    /// Plain linear index arithmetic. A step off the side of the board lands
    /// on the far side of the neighbouring row; only indices outside 0..63
    /// are discarded.
    #[default]
    Wrap,
    /// Steps are taken in (row, column) space and stop at every edge.
    Bounded,
}

/// A displacement in rows and columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Offset {
    pub rows: isize,
    pub cols: isize,
}

impl Offset {
    pub(crate) const fn new(rows: isize, cols: isize) -> Self {
        Offset { rows, cols }
    }

    /// The equivalent linear delta, e.g. one row up and one column right is +9.
    #[inline]
    pub(crate) const fn linear(self) -> isize {
        self.rows * BOARD_SIZE as isize + self.cols
    }

    /// Square reached after `steps` repetitions of this offset from `from`.
    ///
    /// Under [`EdgePolicy::Wrap`] the result may lie outside 0..63 and is left
    /// for the bounds filter. Under [`EdgePolicy::Bounded`] `None` means the
    /// step left the board.
    #[inline]
    pub(crate) fn step(self, from: usize, steps: isize, policy: EdgePolicy) -> Option<isize> {
        match policy {
            EdgePolicy::Wrap => Some(from as isize + self.linear() * steps),
            EdgePolicy::Bounded => {
                let row = row_of(from) as isize + self.rows * steps;
                let col = col_of(from) as isize + self.cols * steps;
                let size = BOARD_SIZE as isize;
                if (0..size).contains(&row) && (0..size).contains(&col) {
                    Some(row * size + col)
                } else {
                    None
                }
            }
        }
    }
}

pub(crate) const DIAGONALS: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(-1, -1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
];

pub(crate) const ORTHOGONALS: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
];

pub(crate) const KNIGHT_JUMPS: [Offset; 8] = [
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(1, -2),
    Offset::new(2, -1),
    Offset::new(-1, -2),
    Offset::new(-2, -1),
    Offset::new(-1, 2),
    Offset::new(-2, 1),
];

pub(crate) const KING_STEPS: [Offset; 8] = [
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
];
