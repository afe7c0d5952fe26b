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

//! A file storing a list of FENs for testing purposes.

#![allow(dead_code)]

/// The FEN of the official starting position for any chess game.
pub const BOARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The position after 1. e4 e5.
pub const OPEN_GAME_FEN: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";

/// A board with a black king on H8 and white king on A1, and nothing else.
/// White to move.
pub const TWO_KINGS_BOARD_FEN: &str = "7k/8/8/8/8/8/8/K7 w - - 0 1";

/// A lone white king on D5.
pub const LONE_KING_FEN: &str = "8/8/8/3K4/8/8/8/8 w - - 0 1";

/// A board where White could play exf6 as en passant, if en passant were
/// generated.
pub const EN_PASSANT_READY_FEN: &str =
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";

/// The white king on E1 is attacked along the first rank by the rook on A1.
pub const ROOK_CHECK_FEN: &str = "4k3/8/8/8/8/8/8/r3K3 w - - 0 1";

/// Each king is attacked by the other side's rook.
pub const BOTH_IN_CHECK_FEN: &str = "4k2R/8/8/8/8/8/8/r3K3 w - - 0 1";

/// Black can win the white queen on E1 with Rxe1+, and has few enough moves
/// that every one of them is searched at the root.
pub const BLACK_WINS_QUEEN_FEN: &str = "7k/8/8/8/8/8/8/r3Q2K b - - 0 1";

/// The colors of `BLACK_WINS_QUEEN_FEN` swapped: White wins the queen with
/// Rxe1.
pub const WHITE_WINS_QUEEN_FEN: &str = "7K/8/8/8/8/8/8/R3q2k w - - 0 1";

/// Black's only piece is a blocked pawn, so Black has no moves at all. Black
/// to move.
pub const BLACK_STUCK_FEN: &str = "8/8/8/8/8/p7/P7/K7 b - - 0 1";

/// A board where White has played the Fried Liver Attack.
pub const FRIED_LIVER_FEN: &str = "r1bq1b1r/ppp2kpp/2n5/3np3/2B5/8/PPPP1PPP/RNBQK2R w KQ - 0 7";
