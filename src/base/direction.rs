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

//! Directions, which describe motions between `Square`s.

use std::ops::Mul;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A difference between two squares, measured in rows and columns.
/// Row 0 is at the top of the board (Black's back rank), so "north" from
/// White's point of view is a negative row step.
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    /* Cardinal directions */

    /// A move "north" from White's point of view, in the direction a white
    /// pawn would travel.
    pub const NORTH: Self = Self::new(-1, 0);

    /// A move "south" from White's point of view.
    pub const SOUTH: Self = Self::new(1, 0);

    /// A move "east" from White's point of view.
    pub const EAST: Self = Self::new(0, 1);

    /// A move "west" from White's point of view.
    pub const WEST: Self = Self::new(0, -1);

    /* Composite directions */

    pub const NORTHWEST: Self = Self::new(-1, -1);
    pub const NORTHEAST: Self = Self::new(-1, 1);
    pub const SOUTHWEST: Self = Self::new(1, -1);
    pub const SOUTHEAST: Self = Self::new(1, 1);

    /// The directions that a rook can move, along only one step, in the order
    /// they are scanned.
    pub const ROOK_DIRECTIONS: [Self; 4] = [Self::NORTH, Self::SOUTH, Self::WEST, Self::EAST];

    /// The directions that a bishop can move, along only one step, in the
    /// order they are scanned.
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Self::NORTHWEST,
        Self::NORTHEAST,
        Self::SOUTHWEST,
        Self::SOUTHEAST,
    ];

    /// The directions that a queen can slide in, and also the steps a king
    /// can make, in the order they are scanned.
    pub const QUEEN_DIRECTIONS: [Self; 8] = [
        Self::NORTHWEST,
        Self::NORTH,
        Self::NORTHEAST,
        Self::WEST,
        Self::EAST,
        Self::SOUTHWEST,
        Self::SOUTH,
        Self::SOUTHEAST,
    ];

    /// The steps that a knight can make.
    pub const KNIGHT_STEPS: [Self; 8] = [
        Self::new(-2, -1),
        Self::new(-2, 1),
        Self::new(-1, -2),
        Self::new(-1, 2),
        Self::new(1, -2),
        Self::new(1, 2),
        Self::new(2, -1),
        Self::new(2, 1),
    ];

    #[must_use]
    pub const fn new(d_row: i8, d_col: i8) -> Direction {
        Direction { d_row, d_col }
    }
}

impl Mul<i8> for Direction {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: i8) -> Self::Output {
        Direction::new(self.d_row * rhs, self.d_col * rhs)
    }
}
