use super::super::filters::filter_bounds;
use super::super::types::square::{row_of, Offset};
use super::super::{Board, Color, Rules};

impl Rules {
    pub(crate) fn generate_pawn_moves(&self, from: usize, board: &Board, color: Color) -> Vec<usize> {
        let mut moves = self.generate_pawn_advances(from, board, color);
        moves.extend(self.generate_pawn_attacks(from, board, color));
        moves
    }

    /// One step forward, and a second one from the starting row. Each target
    /// must be empty; the square in between is not consulted. The start is
    /// judged by row alone and `has_moved` is not read.
    fn generate_pawn_advances(&self, from: usize, board: &Board, color: Color) -> Vec<usize> {
        let forward = Offset::new(color.pawn_direction(), 0);
        let max_steps = if row_of(from) == color.pawn_start_row() { 2 } else { 1 };

        let candidates = (1..=max_steps)
            .filter_map(|steps| forward.step(from, steps, self.edge_policy))
            .filter(|&target| board.at(target).is_none());

        filter_bounds(candidates, from, board)
    }

    /// Forward diagonals, only where an enemy piece stands.
    pub(crate) fn generate_pawn_attacks(&self, from: usize, board: &Board, color: Color) -> Vec<usize> {
        let dir = color.pawn_direction();
        let diagonals = [Offset::new(dir, -dir), Offset::new(dir, dir)];
        let targets = diagonals
            .iter()
            .filter_map(|diag| diag.step(from, 1, self.edge_policy));
        filter_bounds(targets, from, board)
            .into_iter()
            .filter(|&target| board.get(target).is_some())
            .collect()
    }
}
