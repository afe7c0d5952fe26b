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

//! Board representation and the rules of piece movement.

// Many module elements are re-exported to make names more ergonomic to access.

mod castling;
pub use castling::CastleRights;

mod color;
pub use color::Color;

mod direction;
pub use direction::Direction;

mod error;
pub use error::{FenError, ParseError};

mod fen;

pub mod movegen;

mod moves;
pub use moves::Move;

pub mod perft;

mod piece;
pub use piece::{ColoredPiece, Piece};

mod position;
pub use position::Position;

mod square;
pub use square::Square;
