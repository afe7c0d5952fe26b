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

//! The score type shared by the evaluator and the bots.

use std::{
    fmt::{Display, Formatter},
    ops::{Add, Div, Neg},
};

use crate::base::Color;

#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
/// A measure of how good a position is, in centipawns.
///
/// Raw evaluations are from White's point of view: positive values favor
/// White and negative values favor Black. Use [`Eval::for_color`] to look at
/// an evaluation from either side.
pub struct Eval(i32);

impl Eval {
    /// An evaluation which is smaller than every evaluation a position can
    /// produce.
    ///
    /// # Examples
    ///
    /// ```
    /// use kibitz::engine::eval::Eval;
    ///
    /// assert!(Eval::MIN < Eval::DRAW);
    /// assert!(Eval::MIN < -Eval::centipawns(40_000));
    /// ```
    pub const MIN: Eval = Eval(-1_000_000);

    /// An evaluation which is larger than every evaluation a position can
    /// produce.
    pub const MAX: Eval = Eval(1_000_000);

    /// The evaluation of a materially level position.
    pub const DRAW: Eval = Eval(0);

    /// The value of one pawn.
    const PAWN_VALUE: i32 = 100;

    #[must_use]
    #[inline(always)]
    /// Construct an `Eval` with the given value in centipawns.
    pub const fn centipawns(x: i32) -> Eval {
        Eval(x)
    }

    #[must_use]
    #[inline(always)]
    /// Put this evaluation into the perspective of the given player.
    /// If the player is Black, the evaluation is negated; if White, it is left
    /// alone. Calling it twice with the same player gives back the original.
    pub const fn for_color(self, player: Color) -> Eval {
        match player {
            Color::White => self,
            Color::Black => Eval(-self.0),
        }
    }
}

impl Display for Eval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if *self <= Eval::MIN {
            write!(f, "-inf")
        } else if *self >= Eval::MAX {
            write!(f, "+inf")
        } else if self.0 == 0 {
            write!(f, "00.00")
        } else {
            #[allow(clippy::cast_precision_loss)]
            let pawns = self.0 as f32 / Eval::PAWN_VALUE as f32;
            write!(f, "{pawns:+2.2}")
        }
    }
}

impl Add<Eval> for Eval {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Eval) -> Eval {
        Eval(self.0 + rhs.0)
    }
}

impl Div<i32> for Eval {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: i32) -> Eval {
        Eval(self.0 / rhs)
    }
}

impl Neg for Eval {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Eval {
        Eval(-self.0)
    }
}
