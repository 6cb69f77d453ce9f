//! Core board types.
//!
//! - `Piece`, `PieceKind` and `Color`, with the piece codec
//! - `PowerUp` and `PowerUpKind`
//! - square indices, algebraic names and step geometry

mod piece;
mod power_up;
pub mod square;

pub use piece::{decode, Color, Piece, PieceKind};
pub use power_up::{PowerUp, PowerUpKind};
pub use square::EdgePolicy;
