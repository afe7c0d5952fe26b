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

//! Generation of pseudo-legal moves, move application and check detection.
//!
//! A pseudo-legal move follows its piece's movement pattern and respects board
//! occupancy, but may leave the mover's own king attacked. Castling, promotion
//! and en passant captures are never generated. The en passant target is kept
//! up to date by `apply_move` so that position records stay faithful, but the
//! generator does not read it.

#[cfg(test)]
mod tests;

use once_cell::sync::Lazy;

use super::{Color, Direction, Move, Piece, Position, Square};

/// The longest distance a sliding piece can travel along one ray.
const MAX_RAY_LENGTH: i8 = 7;

/// A lookup table for the squares a knight can jump to from each square,
/// ignoring occupancy, in scan order.
static KNIGHT_MOVES: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| create_step_attacks(&Direction::KNIGHT_STEPS));

/// A lookup table for the squares a king can step to from each square,
/// ignoring occupancy, in scan order.
static KING_MOVES: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| create_step_attacks(&Direction::QUEEN_DIRECTIONS));

/// Get the on-board destinations of a single step in each of `dirs`, for every
/// square. The outer vector is indexed by `Square::index`.
fn create_step_attacks(dirs: &[Direction]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| dirs.iter().filter_map(|&dir| sq + dir).collect())
        .collect()
}

#[must_use]
/// Get the squares that the piece on `sq` can move to, without regard to
/// whether the move would leave its own king in check.
///
/// Destinations are listed in the order they are scanned for that piece type.
/// Querying an empty square gives an empty list.
pub fn pseudo_legal_moves(pos: &Position, sq: Square) -> Vec<Square> {
    let mut targets = Vec::new();
    let Some(cp) = pos.piece_at(sq) else {
        return targets;
    };

    match cp.piece {
        Piece::Pawn => pawn_moves(pos, sq, cp.color, &mut targets),
        Piece::Knight => step_moves(pos, &KNIGHT_MOVES[sq.index()], cp.color, &mut targets),
        Piece::Bishop => ray_moves(pos, sq, &Direction::BISHOP_DIRECTIONS, cp.color, &mut targets),
        Piece::Rook => ray_moves(pos, sq, &Direction::ROOK_DIRECTIONS, cp.color, &mut targets),
        Piece::Queen => ray_moves(pos, sq, &Direction::QUEEN_DIRECTIONS, cp.color, &mut targets),
        Piece::King => step_moves(pos, &KING_MOVES[sq.index()], cp.color, &mut targets),
    }

    targets
}

/// Append the moves of a pawn of color `color` on `sq`: a single push, a
/// double push from the start row, then captures to the west and east.
fn pawn_moves(pos: &Position, sq: Square, color: Color, targets: &mut Vec<Square>) {
    let forward = Direction::new(color.pawn_direction(), 0);

    if let Some(single) = sq + forward {
        if pos[single].is_none() {
            targets.push(single);
            if sq.row() == usize::from(color.pawn_start_row()) {
                if let Some(double) = sq + forward * 2 {
                    if pos[double].is_none() {
                        targets.push(double);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let capture_dir = Direction::new(color.pawn_direction(), d_col);
        if let Some(target) = sq + capture_dir {
            if pos.color_at_square(target) == Some(!color) {
                targets.push(target);
            }
        }
    }
}

/// Append each of `candidates` which is empty or holds an enemy of `color`.
fn step_moves(pos: &Position, candidates: &[Square], color: Color, targets: &mut Vec<Square>) {
    targets.extend(
        candidates
            .iter()
            .copied()
            .filter(|&target| pos.color_at_square(target) != Some(color)),
    );
}

/// Append the squares reachable by sliding along each of `dirs`. A ray stops at
/// the first occupied square, which is included only if it holds an enemy.
fn ray_moves(
    pos: &Position,
    sq: Square,
    dirs: &[Direction],
    color: Color,
    targets: &mut Vec<Square>,
) {
    for &dir in dirs {
        for dist in 1..=MAX_RAY_LENGTH {
            let Some(target) = sq + dir * dist else {
                break;
            };
            match pos.color_at_square(target) {
                None => targets.push(target),
                Some(occupant) => {
                    if occupant != color {
                        targets.push(target);
                    }
                    break;
                }
            }
        }
    }
}

#[must_use]
/// Get every pseudo-legal move for the pieces of `color`. Squares are visited
/// row by row from row 0, and each piece's moves are listed in scan order.
pub fn side_moves(pos: &Position, color: Color) -> Vec<Move> {
    pos.pieces()
        .filter(|&(_, cp)| cp.color == color)
        .flat_map(|(from, _)| {
            pseudo_legal_moves(pos, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

#[must_use]
/// Determine whether `m` moves a piece belonging to the player to move onto
/// one of that piece's pseudo-legal destinations.
pub fn is_pseudo_legal(pos: &Position, m: Move) -> bool {
    pos.color_at_square(m.from) == Some(pos.player_to_move)
        && pseudo_legal_moves(pos, m.from).contains(&m.to)
}

/// Move the piece on `from` to `to`, capturing whatever stood there.
///
/// Returns `false`, leaving the position untouched, if `from` is empty. No
/// other check is made: callers who need legality must consult the generator
/// first. The player to move is flipped, the fullmove number advances when
/// play returns to White, and the en passant target is set to the skipped
/// square after a two-square pawn advance and cleared otherwise. Castling
/// rights and the halfmove clock are left as they are. The fullmove number
/// stops at `u32::MAX`.
pub fn apply_move(pos: &mut Position, from: Square, to: Square) -> bool {
    let Some(mover) = pos.piece_at(from) else {
        return false;
    };

    pos.en_passant_square = None;
    if mover.piece == Piece::Pawn && from.row().abs_diff(to.row()) == 2 {
        // the rows differ by two, so halving the summed indices lands on the
        // middle row
        pos.en_passant_square = Square::from_index((from.index() + to.index()) / 2);
    }

    pos.set_piece(to, Some(mover));
    pos.set_piece(from, None);

    pos.player_to_move = !pos.player_to_move;
    if pos.player_to_move == Color::White {
        pos.fullmove_number = pos.fullmove_number.saturating_add(1);
    }

    true
}

#[must_use]
/// Determine whether the king of `color` is attacked by any opposing piece.
///
/// A board with no king of that color is never in check.
pub fn is_in_check(pos: &Position, color: Color) -> bool {
    let Some(king_sq) = pos.king_square(color) else {
        return false;
    };

    pos.pieces()
        .filter(|&(_, cp)| cp.color != color)
        .any(|(sq, _)| pseudo_legal_moves(pos, sq).contains(&king_sq))
}
