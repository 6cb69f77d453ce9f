use super::super::filters::filter_bounds;
use super::super::types::square::KING_STEPS;
use super::super::{Board, Color, PieceKind, Rules};

impl Rules {
    /// Adjacent squares that do not leave the king in check.
    ///
    /// Returns nothing unless a king stands on `from`.
    pub(crate) fn generate_king_moves(&self, from: usize, board: &Board) -> Vec<usize> {
        let Some(king) = board.get(from).filter(|p| p.kind == PieceKind::King) else {
            return Vec::new();
        };
        let color = king.color;

        self.king_reach(from, board)
            .into_iter()
            .filter(|&target| {
                let safe = !self.is_in_check(color, &board.relocated(from, target));
                if !safe {
                    rules_trace!("{} king on {} may not step into check on {}", color, from, target);
                }
                safe
            })
            .collect()
    }

    /// The eight neighbours, bounds and color filtered. Whether stepping there
    /// would be legal is not considered, so this doubles as the king's threat
    /// zone.
    pub(crate) fn king_reach(&self, from: usize, board: &Board) -> Vec<usize> {
        let targets = KING_STEPS
            .iter()
            .filter_map(|step| step.step(from, 1, self.edge_policy));
        filter_bounds(targets, from, board)
    }

    /// Whether any enemy capture set contains a king of `color`.
    #[must_use]
    pub fn is_in_check(&self, color: Color, board: &Board) -> bool {
        board
            .occupied()
            .filter(|(_, piece)| piece.color != color)
            .any(|(idx, _)| {
                self.capture_moves(idx, board)
                    .into_iter()
                    .any(|target| board.get(target).is_some_and(|p| p.is_king_of(color)))
            })
    }
}
