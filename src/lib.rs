#[macro_use]
mod logging;

pub mod board;

pub use board::{
    capture_moves, decode, is_in_check, moves, validate_move, Board, BoardBuilder, Color,
    DefenderStrategy, EdgePolicy, Piece, PieceKind, PowerUp, PowerUpKind, Rules, Shield,
};
