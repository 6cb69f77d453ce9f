use super::super::filters::filter_bounds;
use super::super::types::square::{Offset, BOARD_SIZE, DIAGONALS, ORTHOGONALS};
use super::super::{Board, Rules};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Rules {
    pub(crate) fn generate_slider_moves(
        &self,
        from: usize,
        board: &Board,
        slider: SliderType,
    ) -> Vec<usize> {
        let candidates = match slider {
            SliderType::Bishop => self.slide(from, board, &DIAGONALS),
            SliderType::Rook => self.slide(from, board, &ORTHOGONALS),
            SliderType::Queen => {
                let mut all = self.slide(from, board, &DIAGONALS);
                all.extend(self.slide(from, board, &ORTHOGONALS));
                all
            }
        };
        filter_bounds(candidates, from, board)
    }

    /// Walk each direction up to seven steps, keeping the first occupied
    /// square reached and stopping there.
    fn slide(&self, from: usize, board: &Board, directions: &[Offset]) -> Vec<isize> {
        let mut candidates = Vec::with_capacity(directions.len() * (BOARD_SIZE - 1));
        for &dir in directions {
            for steps in 1..BOARD_SIZE as isize {
                let Some(target) = dir.step(from, steps, self.edge_policy) else {
                    break;
                };
                candidates.push(target);
                if board.at(target).is_some() {
                    break;
                }
            }
        }
        candidates
    }
}
