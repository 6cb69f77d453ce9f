mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::error::MoveError;
use super::filters::apply_defender_strategies;
use super::types::square;
use super::{Board, Color, Piece, PieceKind, Rules};

impl Rules {
    /// Legal destinations for the piece on `loc`.
    ///
    /// Empty or off-board squares give an empty list.
    #[must_use]
    pub fn moves(&self, loc: usize, board: &Board) -> Vec<usize> {
        let Some(piece) = board.get(loc) else {
            return Vec::new();
        };
        rules_trace!("generating moves for {} on {}", piece, loc);
        let candidates = self.generate_piece_moves(loc, board, piece);
        apply_defender_strategies(candidates, loc, board, &self.strategies)
    }

    /// Squares the piece on `loc` threatens.
    ///
    /// Bishops, rooks, queens and knights threaten the enemy-occupied subset
    /// of their moves. Pawns threaten their diagonals only when an enemy is
    /// there. Kings threaten all eight neighbours, occupied or not, without
    /// the check test their own moves go through.
    #[must_use]
    pub fn capture_moves(&self, loc: usize, board: &Board) -> Vec<usize> {
        let Some(piece) = board.get(loc) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::Bishop | PieceKind::Knight | PieceKind::Queen | PieceKind::Rook => self
                .moves(loc, board)
                .into_iter()
                .filter(|&target| board.get(target).is_some_and(|p| p.color != piece.color))
                .collect(),
            PieceKind::Pawn => self.generate_pawn_attacks(loc, board, piece.color),
            PieceKind::King => self.king_reach(loc, board),
            PieceKind::Blank => Vec::new(),
        }
    }

    /// Whether `to` is one of the legal destinations from `from`.
    #[must_use]
    pub fn validate_move(&self, from: usize, to: usize, board: &Board) -> bool {
        self.moves(from, board).contains(&to)
    }

    /// Validate a move and return the board after it.
    pub fn try_move(&self, from: usize, to: usize, board: &Board) -> Result<Board, MoveError> {
        for index in [from, to] {
            square::check(index).map_err(|_| MoveError::SquareOutOfRange { index })?;
        }
        if board.is_empty(from) {
            return Err(MoveError::EmptySquare { from });
        }
        if !self.validate_move(from, to, board) {
            rules_debug!("rejected move {} -> {}", from, to);
            return Err(MoveError::Illegal { from, to });
        }
        Ok(board.with_move(from, to))
    }

    fn generate_piece_moves(&self, from: usize, board: &Board, piece: &Piece) -> Vec<usize> {
        match piece.kind {
            PieceKind::Bishop => self.generate_slider_moves(from, board, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_moves(from, board, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_moves(from, board, SliderType::Queen),
            PieceKind::Knight => self.generate_knight_moves(from, board),
            PieceKind::Pawn => self.generate_pawn_moves(from, board, piece.color),
            PieceKind::King => self.generate_king_moves(from, board),
            PieceKind::Blank => Vec::new(),
        }
    }
}

/// [`Rules::moves`] under the standard rule set.
#[must_use]
pub fn moves(loc: usize, board: &Board) -> Vec<usize> {
    Rules::standard().moves(loc, board)
}

/// [`Rules::capture_moves`] under the standard rule set.
#[must_use]
pub fn capture_moves(loc: usize, board: &Board) -> Vec<usize> {
    Rules::standard().capture_moves(loc, board)
}

/// [`Rules::validate_move`] under the standard rule set.
///
/// ```
/// use powerup_chess::{validate_move, Board};
///
/// let board = Board::standard();
/// assert!(validate_move(12, 28, &board));
/// assert!(!validate_move(12, 36, &board));
/// ```
#[must_use]
pub fn validate_move(from: usize, to: usize, board: &Board) -> bool {
    Rules::standard().validate_move(from, to, board)
}

/// [`Rules::is_in_check`] under the standard rule set.
#[must_use]
pub fn is_in_check(color: Color, board: &Board) -> bool {
    Rules::standard().is_in_check(color, board)
}
