/*
  Kibitz, a small chess engine for a gamified study portal.
  Copyright (C) 2022 The Kibitz Authors.

  Kibitz is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Kibitz is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

use super::*;
use crate::{base::ColoredPiece, fens::*};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn squares(names: &[&str]) -> Vec<Square> {
    names.iter().map(|name| sq(name)).collect()
}

/// Compare two lists of squares without regard to order.
fn assert_same_squares(mut actual: Vec<Square>, mut expected: Vec<Square>) {
    actual.sort();
    expected.sort();
    assert_eq!(actual, expected);
}

#[test]
/// Test that each side has 16 pawn moves and 4 knight moves in the start
/// position.
fn start_position_has_twenty_moves() {
    let pos = Position::default();
    let white_moves = side_moves(&pos, Color::White);
    assert_eq!(white_moves.len(), 20);
    let pawn_moves = white_moves
        .iter()
        .filter(|m| pos.type_at_square(m.from) == Some(Piece::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);
    assert_eq!(side_moves(&pos, Color::Black).len(), 20);
}

#[test]
/// Test that a king alone in the center of the board has 8 moves.
fn lone_king_has_eight_moves() {
    let pos = Position::from_fen(LONE_KING_FEN).unwrap();
    assert_same_squares(
        pseudo_legal_moves(&pos, sq("d5")),
        squares(&["c6", "d6", "e6", "c5", "e5", "c4", "d4", "e4"]),
    );
}

#[test]
fn cornered_king_has_three_moves() {
    let pos = Position::from_fen(TWO_KINGS_BOARD_FEN).unwrap();
    assert_same_squares(
        pseudo_legal_moves(&pos, sq("a1")),
        squares(&["a2", "b1", "b2"]),
    );
}

#[test]
/// Test that an empty square has no moves.
fn empty_square_has_no_moves() {
    let pos = Position::default();
    assert!(pseudo_legal_moves(&pos, sq("e4")).is_empty());
}

#[test]
/// Test that knights jump over pieces but not onto friendly ones.
fn knight_moves_from_start() {
    let pos = Position::default();
    assert_eq!(pseudo_legal_moves(&pos, sq("b1")), squares(&["a3", "c3"]));
    assert_eq!(pseudo_legal_moves(&pos, sq("g8")), squares(&["f6", "h6"]));
}

#[test]
/// Test that pawns list their single push before their double push.
fn pawn_pushes_in_scan_order() {
    let pos = Position::default();
    assert_eq!(pseudo_legal_moves(&pos, sq("e2")), squares(&["e3", "e4"]));
    assert_eq!(pseudo_legal_moves(&pos, sq("d7")), squares(&["d6", "d5"]));
}

#[test]
/// Test that a pawn cannot push through or onto an occupied square.
fn blocked_pawn_pushes() {
    let mut pos = Position::default();
    pos.set_piece(sq("e4"), Some(ColoredPiece::new(Piece::Knight, Color::Black)));
    assert_eq!(pseudo_legal_moves(&pos, sq("e2")), squares(&["e3"]));

    pos.set_piece(sq("e3"), Some(ColoredPiece::new(Piece::Knight, Color::White)));
    assert!(pseudo_legal_moves(&pos, sq("e2")).is_empty());
}

#[test]
/// Test that a pawn which has left its start row can only push one square.
fn moved_pawn_single_push() {
    let pos = Position::from_fen(OPEN_GAME_FEN).unwrap();
    assert!(pseudo_legal_moves(&pos, sq("e4")).is_empty());
    let pos = Position::from_fen("4k3/8/8/8/8/3P4/8/4K3 w - - 0 1").unwrap();
    assert_eq!(pseudo_legal_moves(&pos, sq("d3")), squares(&["d4"]));
}

#[test]
/// Test that pawns capture diagonally onto enemies only.
fn pawn_captures() {
    // exf5 is a capture, the d5 square holds a friendly knight
    let pos =
        Position::from_fen("rnbqkbnr/ppppp1pp/8/3N1p2/4P3/8/PPPP1PPP/R1BQKBNR w KQkq - 0 2")
            .unwrap();
    assert_eq!(pseudo_legal_moves(&pos, sq("e4")), squares(&["e5", "f5"]));
}

#[test]
/// En passant captures are not generated, even when the target square is
/// recorded in the position.
fn en_passant_capture_not_generated() {
    let pos = Position::from_fen(EN_PASSANT_READY_FEN).unwrap();
    assert_eq!(pos.en_passant_square, Some(sq("f6")));
    assert_eq!(pseudo_legal_moves(&pos, sq("e5")), squares(&["e6"]));
}

#[test]
/// Test that a rook's rays stop at the first occupied square, which is
/// included only when it holds an enemy.
fn rook_rays_stop_at_blockers() {
    // friendly pawn on d6, enemy pawns on b4 and d2
    let pos = Position::from_fen("8/8/3P4/8/1p1R4/8/3p4/8 w - - 0 1").unwrap();
    let moves = pseudo_legal_moves(&pos, sq("d4"));
    assert_same_squares(
        moves.clone(),
        squares(&["d5", "d3", "d2", "c4", "b4", "e4", "f4", "g4", "h4"]),
    );
    for beyond in ["d6", "d7", "d1", "a4"] {
        assert!(!moves.contains(&sq(beyond)));
    }
}

#[test]
fn bishop_rays_stop_at_blockers() {
    let pos = Position::from_fen("8/8/8/8/3B4/2P1p3/8/8 w - - 0 1").unwrap();
    assert_same_squares(
        pseudo_legal_moves(&pos, sq("d4")),
        squares(&["c5", "b6", "a7", "e5", "f6", "g7", "h8", "e3"]),
    );
}

#[test]
/// Test that a queen moves along all eight rays.
fn queen_moves_on_empty_board() {
    let pos = Position::from_fen("8/8/8/8/3Q4/8/8/8 w - - 0 1").unwrap();
    assert_eq!(pseudo_legal_moves(&pos, sq("d4")).len(), 27);
}

#[test]
/// Test that sliders boxed in by their own pieces have no moves.
fn sliders_blocked_at_start() {
    let pos = Position::default();
    for name in ["a1", "c1", "d1", "f8", "h8"] {
        assert!(pseudo_legal_moves(&pos, sq(name)).is_empty());
    }
}

#[test]
fn pseudo_legal_check() {
    let pos = Position::default();
    assert!(is_pseudo_legal(&pos, Move::new(sq("e2"), sq("e4"))));
    assert!(is_pseudo_legal(&pos, Move::new(sq("g1"), sq("f3"))));
    // too far
    assert!(!is_pseudo_legal(&pos, Move::new(sq("e2"), sq("e5"))));
    // not White's piece
    assert!(!is_pseudo_legal(&pos, Move::new(sq("e7"), sq("e5"))));
    // no piece at all
    assert!(!is_pseudo_legal(&pos, Move::new(sq("e4"), sq("e5"))));
}

#[test]
/// Test that applying a move from an empty square fails and changes nothing.
fn apply_from_empty_square() {
    let mut pos = Position::default();
    assert!(!apply_move(&mut pos, sq("e4"), sq("e5")));
    assert_eq!(pos, Position::default());
}

#[test]
/// Play 1. e4 e5 and check the position record after each move.
fn scripted_opening() {
    let mut pos = Position::default();

    assert!(apply_move(&mut pos, sq("e2"), sq("e4")));
    assert_eq!(pos.player_to_move, Color::Black);
    assert_eq!(pos.en_passant_square, Some(sq("e3")));
    assert_eq!(pos.fullmove_number, 1);
    assert_eq!(
        pos.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );

    assert!(apply_move(&mut pos, sq("e7"), sq("e5")));
    let fen = pos.to_fen();
    assert_eq!(
        fen.split(' ').next(),
        Some("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR")
    );
    assert_eq!(pos.player_to_move, Color::White);
    // Black's double push sets e6; the target from White's move is gone
    assert_eq!(pos.en_passant_square, Some(sq("e6")));
    assert_eq!(pos.fullmove_number, 2);

    assert!(apply_move(&mut pos, sq("g1"), sq("f3")));
    assert_eq!(pos.en_passant_square, None);
    assert!(apply_move(&mut pos, sq("b8"), sq("c6")));
    assert_eq!(pos.en_passant_square, None);
    assert_eq!(pos.fullmove_number, 3);
}

#[test]
/// Test that a single-square pawn reply clears the en passant target.
fn single_push_clears_en_passant() {
    let mut pos = Position::default();
    assert!(apply_move(&mut pos, sq("e2"), sq("e4")));
    assert_eq!(pos.en_passant_square, Some(sq("e3")));
    assert!(apply_move(&mut pos, sq("e7"), sq("e6")));
    assert_eq!(pos.en_passant_square, None);
    assert_eq!(pos.to_fen().split(' ').nth(3), Some("-"));
}

#[test]
/// Test that moving onto an occupied square replaces its piece.
fn apply_capture() {
    let mut pos = Position::from_fen(ROOK_CHECK_FEN).unwrap();
    assert!(apply_move(&mut pos, sq("e1"), sq("d1")));
    assert!(apply_move(&mut pos, sq("a1"), sq("d1")));
    assert_eq!(
        pos.piece_at(sq("d1")),
        Some(ColoredPiece::new(Piece::Rook, Color::Black))
    );
    assert_eq!(pos.king_square(Color::White), None);
    assert_eq!(pos.pieces().count(), 2);
}

#[test]
/// Test that no legality check is made when applying a move.
fn apply_does_not_validate() {
    let mut pos = Position::default();
    assert!(apply_move(&mut pos, sq("a1"), sq("a5")));
    assert_eq!(pos.type_at_square(sq("a5")), Some(Piece::Rook));
    assert_eq!(pos.player_to_move, Color::Black);
}

#[test]
/// Test that a rook on the king's rank gives check, and that removing or
/// blocking it does not.
fn rook_gives_check() {
    let mut pos = Position::from_fen(ROOK_CHECK_FEN).unwrap();
    assert!(is_in_check(&pos, Color::White));
    assert!(!is_in_check(&pos, Color::Black));

    let mut blocked = pos;
    blocked.set_piece(sq("c1"), Some(ColoredPiece::new(Piece::Knight, Color::White)));
    assert!(!is_in_check(&blocked, Color::White));

    pos.set_piece(sq("a1"), None);
    assert!(!is_in_check(&pos, Color::White));
}

#[test]
fn both_kings_in_check() {
    let pos = Position::from_fen(BOTH_IN_CHECK_FEN).unwrap();
    assert!(is_in_check(&pos, Color::White));
    assert!(is_in_check(&pos, Color::Black));
}

#[test]
/// Test that pawns give check diagonally but not straight ahead.
fn pawn_checks() {
    let pos = Position::from_fen("8/8/8/3p4/4K3/8/8/8 w - - 0 1").unwrap();
    assert!(is_in_check(&pos, Color::White));
    let pos = Position::from_fen("8/8/8/4p3/4K3/8/8/8 w - - 0 1").unwrap();
    assert!(!is_in_check(&pos, Color::White));
}

#[test]
/// Test that a side without a king is never in check.
fn missing_king_not_in_check() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/r7 w - - 0 1").unwrap();
    assert!(!is_in_check(&pos, Color::White));
}

#[test]
/// Play ten random plies and check the resulting record round-trips.
fn random_self_play_round_trip() {
    let mut rng = fastrand::Rng::with_seed(1729);
    let mut pos = Position::default();
    for _ in 0..10 {
        let moves = side_moves(&pos, pos.player_to_move);
        assert!(!moves.is_empty());
        let m = moves[rng.usize(..moves.len())];
        assert!(apply_move(&mut pos, m.from, m.to));
    }
    assert_eq!(pos.fullmove_number, 6);
    assert_eq!(Position::from_fen(&pos.to_fen()), Ok(pos));
}

#[test]
/// Test that the fullmove number stops at its largest value instead of
/// overflowing.
fn fullmove_number_saturates() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 4294967295").unwrap();
    assert!(apply_move(&mut pos, sq("e8"), sq("e7")));
    assert_eq!(pos.fullmove_number, u32::MAX);
    assert_eq!(pos.player_to_move, Color::White);
    assert_eq!(pos.to_fen(), "8/4k3/8/8/8/8/8/4K3 w - - 0 4294967295");
}
