//! Wrapping versus bounded edge geometry.
//!
//! The default rule set steps with plain index arithmetic, so a piece leaving
//! the a or h file reappears on the opposite file one row over. The bounded
//! policy stops at every edge.

use super::{board_with, sorted};
use crate::board::{moves, Board, EdgePolicy, Rules};

fn bounded() -> Rules {
    Rules::default().with_edge_policy(EdgePolicy::Bounded)
}

#[test]
fn test_bishop_wraps_off_a_file() {
    let board = board_with(&[(0, "wb")]);
    let wrapped = sorted(moves(0, &board));
    assert_eq!(
        wrapped,
        vec![7, 9, 14, 18, 21, 27, 28, 35, 36, 42, 45, 49, 54, 63]
    );
    assert_eq!(
        sorted(bounded().moves(0, &board)),
        vec![9, 18, 27, 36, 45, 54, 63]
    );
}

#[test]
fn test_rook_wraps_along_rank() {
    let board = board_with(&[(7, "wr")]);
    assert_eq!(moves(7, &board).len(), 21);
    assert!(moves(7, &board).contains(&8));

    let fenced = sorted(bounded().moves(7, &board));
    assert_eq!(fenced.len(), 14);
    assert!(!fenced.contains(&8));
}

#[test]
fn test_knight_wraps_from_g_file() {
    let board = Board::standard();
    assert_eq!(sorted(moves(6, &board)), vec![16, 21, 23]);
    assert_eq!(sorted(bounded().moves(6, &board)), vec![21, 23]);
}

#[test]
fn test_king_wraps_from_h_file() {
    let board = board_with(&[(7, "wk")]);
    assert_eq!(sorted(moves(7, &board)), vec![0, 6, 8, 14, 15, 16]);
    assert_eq!(sorted(bounded().moves(7, &board)), vec![6, 14, 15]);
}

#[test]
fn test_pawn_attack_wraps_from_h_file() {
    // h2 pawn: +9 lands on a4 under wrapping
    let board = board_with(&[(15, "wp"), (24, "bn"), (22, "bn")]);
    assert_eq!(sorted(moves(15, &board)), vec![22, 23, 24, 31]);
    assert_eq!(sorted(bounded().moves(15, &board)), vec![22, 23, 31]);
}

#[test]
fn test_bounded_queen_in_center() {
    let board = board_with(&[(27, "wq")]);
    assert_eq!(bounded().moves(27, &board).len(), 27);
}

#[test]
fn test_bounded_knight_in_corner() {
    let board = board_with(&[(0, "wn")]);
    assert_eq!(sorted(bounded().moves(0, &board)), vec![10, 17]);
}

#[test]
fn test_policies_agree_away_from_edges() {
    let board = board_with(&[(27, "wn"), (28, "wk"), (36, "bp")]);
    for sq in [27, 28, 36] {
        assert_eq!(
            sorted(moves(sq, &board)),
            sorted(bounded().moves(sq, &board)),
            "square {sq}"
        );
    }
}
