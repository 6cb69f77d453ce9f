//! Candidate filter pipeline.
//!
//! Raw generator output passes through [`filter_bounds`] and then through the
//! defender strategies configured on [`Rules`](crate::Rules). A strategy vetoes
//! individual destination squares; it never sees which generator produced
//! them, so power-up effects compose with every piece kind.

use std::fmt;

use super::types::square::{on_board, NUM_SQUARES};
use super::types::PowerUpKind;
use super::Board;

/// Drop candidates that are off the board or hold a piece of the mover's color.
///
/// Enemy-occupied squares always pass; whether they may really be captured is
/// up to the defender strategies. Each square is kept once, at its first
/// position, since wrapped directions can reach the same square twice.
pub fn filter_bounds<I>(candidates: I, source: usize, board: &Board) -> Vec<usize>
where
    I: IntoIterator<Item = isize>,
{
    let mover = board.get(source).map(|piece| piece.color);
    let mut seen = [false; NUM_SQUARES];
    candidates
        .into_iter()
        .filter_map(on_board)
        .filter(|&target| match (mover, board.get(target)) {
            (Some(color), Some(occupant)) => occupant.color != color,
            _ => true,
        })
        .filter(|&target| !std::mem::replace(&mut seen[target], true))
        .collect()
}

/// A veto over a single destination square.
///
/// Strategies are evaluated per candidate, and a candidate survives only if
/// every strategy allows it.
pub trait DefenderStrategy: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether the piece on `source` may land on `target`.
    fn allows(&self, source: usize, board: &Board, target: usize) -> bool;
}

/// A piece carrying a Shield power-up cannot be captured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shield;

impl DefenderStrategy for Shield {
    fn name(&self) -> &'static str {
        "shield"
    }

    fn allows(&self, _source: usize, board: &Board, target: usize) -> bool {
        !board
            .get(target)
            .is_some_and(|occupant| occupant.has_power_up(PowerUpKind::Shield))
    }
}

/// Keep the candidates every strategy allows.
pub fn apply_defender_strategies(
    candidates: Vec<usize>,
    source: usize,
    board: &Board,
    strategies: &[Box<dyn DefenderStrategy>],
) -> Vec<usize> {
    candidates
        .into_iter()
        .filter(|&target| {
            strategies.iter().all(|strategy| {
                let allowed = strategy.allows(source, board, target);
                if !allowed {
                    rules_trace!("{} vetoed {} -> {}", strategy.name(), source, target);
                }
                allowed
            })
        })
        .collect()
}
