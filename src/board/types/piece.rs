//! Piece and color types, plus the two-character piece codec.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::power_up::{PowerUp, PowerUpKind};
use crate::board::error::PieceCodeError;

/// Piece types.
///
/// `Blank` is the codec's placeholder for an unrecognised code. It is never
/// used to mark an empty square; empty squares are `None` on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Bishop,
    King,
    Knight,
    Pawn,
    Queen,
    Rook,
    Blank,
}

impl PieceKind {
    /// Kind selected by the second character of a piece code.
    /// Unrecognised characters yield `Blank`.
    #[must_use]
    pub const fn from_code_char(c: char) -> PieceKind {
        match c {
            'b' => PieceKind::Bishop,
            'k' => PieceKind::King,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            _ => PieceKind::Blank,
        }
    }

    /// Lowercase code character, `None` for `Blank`
    #[inline]
    #[must_use]
    pub const fn to_code_char(self) -> Option<char> {
        match self {
            PieceKind::Bishop => Some('b'),
            PieceKind::King => Some('k'),
            PieceKind::Knight => Some('n'),
            PieceKind::Pawn => Some('p'),
            PieceKind::Queen => Some('q'),
            PieceKind::Rook => Some('r'),
            PieceKind::Blank => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Bishop => "Bishop",
            PieceKind::King => "King",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Blank => "Blank",
        };
        f.write_str(name)
    }
}

/// Piece colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn forward direction in rows (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting row (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn code_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    /// Written by [`Board::with_move`](crate::Board::with_move); never read by
    /// move generation.
    pub has_moved: bool,
    code: String,
    pub power_ups: Vec<PowerUp>,
}

impl Piece {
    /// Build a piece directly, synthesising its two-character code.
    #[must_use]
    pub fn new(color: Color, kind: PieceKind) -> Self {
        let mut code = String::with_capacity(2);
        code.push(color.code_char());
        code.push(kind.to_code_char().unwrap_or('-'));
        Piece {
            color,
            kind,
            has_moved: false,
            code,
            power_ups: Vec::new(),
        }
    }

    /// The encoding this piece was created from.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns true if the piece carries a power-up of the given kind.
    #[must_use]
    pub fn has_power_up(&self, kind: PowerUpKind) -> bool {
        self.power_ups.iter().any(|p| p.kind == kind)
    }

    /// Returns this piece with `power_up` appended.
    #[must_use]
    pub fn with_power_up(mut self, power_up: PowerUp) -> Self {
        self.power_ups.push(power_up);
        self
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_king_of(&self, color: Color) -> bool {
        self.kind == PieceKind::King && self.color == color
    }
}

/// Decode a two-character piece code: color first, kind second.
///
/// Never fails: any first character other than `'w'` is Black and any
/// unknown kind character is [`PieceKind::Blank`].
/// Use [`Piece::from_str`] for strict parsing.
///
/// ```
/// use powerup_chess::{decode, Color, PieceKind};
///
/// let piece = decode("wp");
/// assert_eq!(piece.color, Color::White);
/// assert_eq!(piece.kind, PieceKind::Pawn);
/// assert!(!piece.has_moved);
/// assert!(piece.power_ups.is_empty());
/// ```
#[must_use]
pub fn decode(code: &str) -> Piece {
    let mut chars = code.chars();
    let color = match chars.next() {
        Some('w') => Color::White,
        _ => Color::Black,
    };
    let kind = chars.next().map_or(PieceKind::Blank, PieceKind::from_code_char);
    Piece {
        color,
        kind,
        has_moved: false,
        code: code.to_string(),
        power_ups: Vec::new(),
    }
}

impl FromStr for Piece {
    type Err = PieceCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(PieceCodeError::WrongLength {
                code: s.to_string(),
            });
        }
        if !matches!(chars[0], 'w' | 'b') {
            return Err(PieceCodeError::InvalidColor { char: chars[0] });
        }
        if PieceKind::from_code_char(chars[1]) == PieceKind::Blank {
            return Err(PieceCodeError::InvalidKind { char: chars[1] });
        }
        Ok(decode(s))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
