//! Shield and custom defender strategy tests.

use super::{board_with, sorted};
use crate::board::{
    is_in_check, moves, validate_move, Board, Color, DefenderStrategy, PieceKind, PowerUp,
    PowerUpKind, Rules,
};

fn shielded(pieces: &[(usize, &str)], shield_on: usize) -> Board {
    board_with(pieces).with_power_up(shield_on, PowerUp::shield())
}

#[test]
fn test_shield_blocks_rook_capture() {
    let board = shielded(&[(0, "wr"), (4, "bp")], 4);
    let rank: Vec<usize> = sorted(moves(0, &board)).into_iter().filter(|&s| s < 8).collect();
    assert_eq!(rank, vec![1, 2, 3]);
}

#[test]
fn test_shield_blocks_knight_capture() {
    let board = shielded(&[(27, "wn"), (44, "bq")], 44);
    let knight = sorted(moves(27, &board));
    assert_eq!(knight, vec![10, 12, 17, 21, 33, 37, 42]);
    assert!(!validate_move(27, 44, &board));
}

#[test]
fn test_shield_blocks_pawn_capture() {
    let board = shielded(&[(12, "wp"), (21, "bn")], 21);
    assert_eq!(moves(12, &board), vec![20, 28]);
}

#[test]
fn test_shield_blocks_king_capture() {
    let board = shielded(&[(27, "wk"), (35, "bn")], 35);
    assert!(!moves(27, &board).contains(&35));
}

#[test]
fn test_shielded_piece_still_moves() {
    let board = shielded(&[(0, "wr")], 0);
    assert_eq!(moves(0, &board).len(), 14);
}

#[test]
fn test_other_power_ups_have_no_effect() {
    for kind in PowerUpKind::ALL.into_iter().filter(|&k| k != PowerUpKind::Shield) {
        let board = board_with(&[(0, "wr"), (4, "bp")]).with_power_up(4, PowerUp::new(kind));
        assert!(validate_move(0, 4, &board), "{kind} should not block capture");
    }
}

#[test]
fn test_removing_shield_restores_capture() {
    let board = shielded(&[(0, "wr"), (4, "bp")], 4);
    assert!(!validate_move(0, 4, &board));
    assert!(validate_move(0, 4, &board.without_power_ups(4)));
}

#[test]
fn test_rules_without_strategies_ignore_shield() {
    let rules = Rules::default().without_strategies();
    let board = shielded(&[(0, "wr"), (4, "bp")], 4);
    assert!(rules.validate_move(0, 4, &board));
}

#[test]
fn test_shielded_king_ignores_slider_checks() {
    // Slider threats go through the full move set, which the Shield filters
    let board = shielded(&[(4, "wk"), (60, "br")], 4);
    assert!(!is_in_check(Color::White, &board));
}

#[test]
fn test_shielded_king_still_sees_pawn_and_king_threats() {
    // Pawn and king threat zones bypass the defender strategies
    let board = shielded(&[(4, "wk"), (11, "bp")], 4);
    assert!(is_in_check(Color::White, &board));
    let board = shielded(&[(27, "wk"), (43, "bk")], 27);
    assert_eq!(sorted(moves(27, &board)), vec![18, 19, 20, 26, 28]);
}

#[derive(Debug)]
struct PawnProof;

impl DefenderStrategy for PawnProof {
    fn name(&self) -> &'static str {
        "pawn-proof"
    }

    fn allows(&self, source: usize, board: &Board, target: usize) -> bool {
        let attacker_is_pawn = board.get(source).is_some_and(|p| p.kind == PieceKind::Pawn);
        let guarded = board
            .get(target)
            .is_some_and(|p| p.has_power_up(PowerUpKind::Guard));
        !(attacker_is_pawn && guarded)
    }
}

#[test]
fn test_custom_strategy_composes_with_shield() {
    let rules = Rules::default().with_strategy(PawnProof);
    let board = board_with(&[(12, "wp"), (19, "bn"), (21, "bb"), (0, "wr"), (24, "bq")])
        .with_power_up(19, PowerUp::new(PowerUpKind::Guard))
        .with_power_up(21, PowerUp::shield())
        .with_power_up(24, PowerUp::new(PowerUpKind::Guard));

    // Guard stops the pawn, Shield stops everything
    assert_eq!(rules.moves(12, &board), vec![20, 28]);
    // Guard does nothing against a rook
    assert!(rules.validate_move(0, 24, &board));
}
