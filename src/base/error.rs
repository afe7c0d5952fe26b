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

//! Errors raised while reading text forms of colors, squares, moves and
//! positions.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// A failure to parse a color, square or move from text.
pub enum ParseError {
    /// The text did not name a color.
    #[error("unknown color `{0}`")]
    Color(String),
    /// A square name was not two characters long.
    #[error("square name must be 2 characters, got `{0}`")]
    SquareLength(String),
    /// The file letter of a square was not in `a..=h`.
    #[error("illegal file for square `{0}`")]
    SquareFile(String),
    /// The rank digit of a square was not in `1..=8`.
    #[error("illegal rank for square `{0}`")]
    SquareRank(String),
    /// A move was not written as two square names.
    #[error("move must be written as two squares such as `e2e4`, got `{0}`")]
    Move(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// A failure to decode a position record.
pub enum FenError {
    /// The record had no board field at all.
    #[error("position record is empty")]
    Empty,
    /// The board field did not contain 8 ranks.
    #[error("expected 8 ranks in board field, found {0}")]
    RankCount(usize),
    /// A rank described more or fewer than 8 squares.
    #[error("rank {0} does not describe exactly 8 squares")]
    RankWidth(usize),
    /// A board character was neither a piece code nor a digit.
    #[error("unrecognized piece character `{0}`")]
    PieceCode(char),
    /// The side-to-move field was not `w` or `b`.
    #[error("unrecognized player to move `{0}`")]
    SideToMove(String),
    /// The castling field held something other than `KQkq` or `-`.
    #[error("unrecognized castle rights character `{0}`")]
    CastleRights(char),
    /// The en passant field was not a square name or `-`.
    #[error("bad en passant square: {0}")]
    EnPassant(#[from] ParseError),
    /// A move counter was not a non-negative integer.
    #[error("bad move counter `{0}`")]
    Counter(String),
}
