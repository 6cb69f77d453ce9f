//! Error types for the strict parsing and editing helpers.
//!
//! Move queries never fail; these only come out of the helpers that build
//! boards, parse codes and apply moves.

use std::fmt;

/// Error type for strict piece code parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceCodeError {
    /// Code is not exactly two characters
    WrongLength { code: String },
    /// First character is neither 'w' nor 'b'
    InvalidColor { char: char },
    /// Second character is not one of b, k, n, p, q, r
    InvalidKind { char: char },
}

impl fmt::Display for PieceCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceCodeError::WrongLength { code } => {
                write!(f, "Piece code '{code}' must be exactly 2 characters")
            }
            PieceCodeError::InvalidColor { char } => {
                write!(f, "Invalid color character '{char}', expected 'w' or 'b'")
            }
            PieceCodeError::InvalidKind { char } => {
                write!(f, "Invalid piece character '{char}'")
            }
        }
    }
}

impl std::error::Error for PieceCodeError {}

/// Error type for square parsing and range checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index outside 0..63
    OutOfRange { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { index } => {
                write!(f, "Square {index} out of range (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Square list does not hold exactly 64 entries
    WrongLength { found: usize },
    /// Invalid piece character in a placement string
    InvalidPiece { char: char },
    /// Placement string has more or fewer than 8 ranks
    WrongRankCount { found: usize },
    /// A rank describes more or fewer than 8 files
    WrongFileCount { rank: usize, files: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongLength { found } => {
                write!(f, "Board must have 64 squares, found {found}")
            }
            BoardError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            BoardError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            BoardError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for applying a move through the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Source or destination index outside 0..63
    SquareOutOfRange { index: usize },
    /// No piece on the source square
    EmptySquare { from: usize },
    /// Destination is not among the legal moves of the source piece
    Illegal { from: usize, to: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::SquareOutOfRange { index } => {
                write!(f, "Square {index} out of range (must be 0-63)")
            }
            MoveError::EmptySquare { from } => {
                write!(f, "No piece on square {from}")
            }
            MoveError::Illegal { from, to } => {
                write!(f, "Illegal move from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
