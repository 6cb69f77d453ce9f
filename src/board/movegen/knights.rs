use super::super::filters::filter_bounds;
use super::super::types::square::KNIGHT_JUMPS;
use super::super::{Board, Rules};

impl Rules {
    pub(crate) fn generate_knight_moves(&self, from: usize, board: &Board) -> Vec<usize> {
        let targets = KNIGHT_JUMPS
            .iter()
            .filter_map(|jump| jump.step(from, 1, self.edge_policy));
        filter_bounds(targets, from, board)
    }
}
