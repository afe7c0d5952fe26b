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

use super::{ParseError, Square};

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A move from one square to another. Moves carry no promotion, castling or
/// capture flags; whatever those would mean is read off the board when the
/// move is applied.
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline(always)]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Read a move written as two square names, such as `e2e4`. Surrounding
    /// whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the text is not two legal square names.
    pub fn from_algebraic(s: &str) -> Result<Move, ParseError> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseError::Move(s.to_string()));
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Ok(Move { from, to })
    }
}

impl Display for Move {
    /// Write this move as the token used in game logs, e.g. `e2e4`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Move, ParseError> {
        Move::from_algebraic(s)
    }
}
