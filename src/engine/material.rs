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

//! Material values for each piece.
//!
//! Every piece is assigned a fixed value in centipawns: pawns are worth 100,
//! knights 320, bishops 330, rooks 500 and queens 900. The king's value is
//! large enough that losing it outweighs any other material, which is how the
//! bots come to care about their king without a notion of checkmate.

use super::eval::Eval;
use crate::base::{Color, Piece, Position, Square};

#[must_use]
/// Get the value of one piece by its type.
pub const fn value(pt: Piece) -> Eval {
    match pt {
        Piece::Pawn => Eval::centipawns(100),
        Piece::Knight => Eval::centipawns(320),
        Piece::Bishop => Eval::centipawns(330),
        Piece::Rook => Eval::centipawns(500),
        Piece::Queen => Eval::centipawns(900),
        Piece::King => Eval::centipawns(20_000),
    }
}

#[must_use]
/// Evaluate a position solely by the amount of material on the board.
/// White's pieces count for the score and Black's against it, regardless of
/// whose turn it is.
pub fn evaluate(pos: &Position) -> Eval {
    pos.pieces()
        .map(|(_, cp)| value(cp.piece).for_color(cp.color))
        .fold(Eval::DRAW, |total, ev| total + ev)
}

#[must_use]
/// Get the material gained by the mover of `color` when a piece on the target
/// square is taken, if any.
pub fn capture_value(pos: &Position, target: Square, color: Color) -> Eval {
    match pos.piece_at(target) {
        Some(cp) if cp.color != color => value(cp.piece),
        _ => Eval::DRAW,
    }
}
