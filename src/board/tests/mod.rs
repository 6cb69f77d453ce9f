//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation and the public validator
//! - `check.rs` - Check detection and king safety
//! - `power_ups.rs` - Shield and custom defender strategies
//! - `edge_policy.rs` - Wrapping versus bounded edge geometry
//! - `proptest.rs` - Property-based tests

mod edge_policy;
mod power_ups;

use crate::board::Board;

/// Sorted copy, for comparing move sets regardless of generation order.
pub(super) fn sorted(mut squares: Vec<usize>) -> Vec<usize> {
    squares.sort_unstable();
    squares
}

/// Board with the given (square, code) pairs.
pub(super) fn board_with(pieces: &[(usize, &str)]) -> Board {
    pieces
        .iter()
        .fold(crate::board::BoardBuilder::new(), |builder, &(idx, code)| {
            builder.code(idx, code)
        })
        .build()
}
