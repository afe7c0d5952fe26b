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

//! Castling rights bookkeeping.
//!
//! Castling moves are never generated; the rights are only carried so that a
//! position record survives a round trip unchanged.

use super::Color;

use std::{
    fmt::{Display, Formatter},
    ops::{BitOr, BitOrAssign},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A simple struct to store the four castling rights.
/// From MSB to LSB:
/// * 4 unused bits
/// * Black queenside castling
/// * Black kingside castling
/// * White queenside castling
/// * White kingside castling
pub struct CastleRights(u8);

impl CastleRights {
    /// A `CastleRights` where all rights are available.
    pub const ALL_RIGHTS: CastleRights = CastleRights(15);

    /// A `CastleRights` where no rights are available.
    pub const NO_RIGHTS: CastleRights = CastleRights(0);

    /// Create a `CastleRights` for kingside castling on one side.
    #[inline(always)]
    #[must_use]
    pub const fn king_castle(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights(1),
            Color::Black => CastleRights(4),
        }
    }

    /// Create a `CastleRights` for queenside castling on one side.
    #[inline(always)]
    #[must_use]
    pub const fn queen_castle(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights(2),
            Color::Black => CastleRights(8),
        }
    }

    #[must_use]
    /// Get the right described by one character of the FEN castling field.
    pub const fn from_code(c: char) -> Option<CastleRights> {
        match c {
            'K' => Some(CastleRights::king_castle(Color::White)),
            'Q' => Some(CastleRights::queen_castle(Color::White)),
            'k' => Some(CastleRights::king_castle(Color::Black)),
            'q' => Some(CastleRights::queen_castle(Color::Black)),
            _ => None,
        }
    }
}

impl BitOr<CastleRights> for CastleRights {
    type Output = CastleRights;
    #[inline(always)]
    fn bitor(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }
}

impl BitOrAssign<CastleRights> for CastleRights {
    #[inline(always)]
    fn bitor_assign(&mut self, other: CastleRights) {
        self.0 |= other.0;
    }
}

impl Display for CastleRights {
    /// Write the rights in FEN order (`KQkq`), or `-` when none remain.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if *self == CastleRights::NO_RIGHTS {
            return write!(f, "-");
        }
        for c in ['K', 'Q', 'k', 'q'] {
            if let Some(right) = CastleRights::from_code(c) {
                if self.0 & right.0 != 0 {
                    write!(f, "{c}")?;
                }
            }
        }
        Ok(())
    }
}
