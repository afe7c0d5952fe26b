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

//! Squares, which are positions on a board.

use super::{Direction, ParseError};

use std::{
    fmt::{Display, Formatter},
    ops::Add,
    str::FromStr,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A square: one of 64 spots on a `Position` that a piece can occupy.
///
/// Squares are addressed by row and column, both in `0..8`. Row 0 is the top
/// of the board as it is drawn, which is rank 8 (Black's back rank); column 0
/// is the A file. A `Square` can only be built through `Square::new`, so every
/// value in existence is on the board.
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// The number of squares on a board.
    pub const NUM: usize = 64;

    #[inline(always)]
    #[must_use]
    /// Create a square from the given row and column. Returns `None` if either
    /// coordinate is outside of `0..8`.
    pub fn new(row: i32, col: i32) -> Option<Square> {
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(row), Ok(col)) if row < 8 && col < 8 => Some(Square { row, col }),
            _ => None,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the square with the given index into a row-major board array.
    pub fn from_index(i: usize) -> Option<Square> {
        if i < Square::NUM {
            #[allow(clippy::cast_possible_truncation)]
            Some(Square {
                row: (i / 8) as u8,
                col: (i % 8) as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over every square, row by row starting from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::NUM).filter_map(Square::from_index)
    }

    #[inline(always)]
    #[must_use]
    /// Get the row of this square. Row 0 is rank 8.
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline(always)]
    #[must_use]
    /// Get the column of this square. Column 0 is the A file.
    pub const fn col(self) -> usize {
        self.col as usize
    }

    #[inline(always)]
    #[must_use]
    /// Get the index of this square in a row-major board array.
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    #[must_use]
    /// Get the name of the file of this square. For instance, the square in
    /// column 0 will have the name `'a'`.
    pub const fn file_name(self) -> char {
        (b'a' + self.col) as char
    }

    #[must_use]
    /// Get the chess rank digit of this square. Row 0 is rank 8.
    pub const fn rank_name(self) -> char {
        (b'8' - self.row) as char
    }

    /// Convert an algebraic string (such as 'e7') to a square.
    /// To get an `Ok` result, the string must be two characters.
    /// The file must be in lowercase.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if `s` is not a legal algebraic
    /// square.
    pub fn from_algebraic(s: &str) -> Result<Square, ParseError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseError::SquareLength(s.to_string()));
        }
        let col = match bytes[0] {
            f @ b'a'..=b'h' => f - b'a',
            _ => return Err(ParseError::SquareFile(s.to_string())),
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => b'8' - r,
            _ => return Err(ParseError::SquareRank(s.to_string())),
        };
        Ok(Square { row, col })
    }
}

impl Add<Direction> for Square {
    type Output = Option<Square>;
    #[inline(always)]
    /// Step from this square. Steps which leave the board give `None`.
    fn add(self, rhs: Direction) -> Self::Output {
        Square::new(
            i32::from(self.row) + i32::from(rhs.d_row),
            i32::from(self.col) + i32::from(rhs.d_col),
        )
    }
}

impl Display for Square {
    #[inline(always)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_name(), self.rank_name())
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Square, ParseError> {
        Square::from_algebraic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that row 0 is named as rank 8 and row 7 as rank 1.
    fn square_names() {
        assert_eq!(Square::new(0, 0).unwrap().to_string(), "a8");
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h1");
        assert_eq!(Square::new(6, 4).unwrap().to_string(), "e2");
        assert_eq!(Square::new(5, 4).unwrap().to_string(), "e3");
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("e4"), Ok(Square::new(4, 4).unwrap()));
        assert_eq!(Square::from_algebraic("f7"), Ok(Square::new(1, 5).unwrap()));
        assert!(Square::from_algebraic("i1").is_err());
        assert!(Square::from_algebraic("a9").is_err());
        assert!(Square::from_algebraic("a10").is_err());
    }

    #[test]
    /// Test that coordinates off the board are rejected.
    fn off_board_rejected() {
        assert_eq!(Square::new(-1, 0), None);
        assert_eq!(Square::new(0, 8), None);
        assert_eq!(Square::new(8, 3), None);
        assert!(Square::new(7, 0).is_some());
    }

    #[test]
    fn add_square_and_direction() {
        let a8 = Square::new(0, 0).unwrap();
        assert_eq!(a8 + Direction::SOUTHEAST, Square::new(1, 1));
        assert_eq!(a8 + Direction::NORTH, None);
        assert_eq!(a8 + Direction::WEST, None);
    }

    #[test]
    fn index_round_trip() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.index()), Some(sq));
        }
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::from_index(64), None);
    }
}
