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

//! Pieces, both bare types and types tagged with their owner.

use super::Color;

use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
/// The type of a piece. This contains no information about the location of a
/// piece, or of its color.
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Total number of piece types.
    pub const NUM_TYPES: usize = 6;

    /// Array containing all piece types.
    pub const ALL_TYPES: [Piece; Piece::NUM_TYPES] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Get the FEN code of this piece as an uppercase character.
    pub const fn code(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        }
    }

    /// Given a FEN character, convert it to a piece type. Must be uppercase.
    pub const fn from_code(c: char) -> Option<Piece> {
        match c {
            'P' => Some(Piece::Pawn),
            'N' => Some(Piece::Knight),
            'B' => Some(Piece::Bishop),
            'R' => Some(Piece::Rook),
            'Q' => Some(Piece::Queen),
            'K' => Some(Piece::King),
            _ => None,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
/// A piece as it sits on the board: a type together with the player who owns
/// it.
pub struct ColoredPiece {
    pub piece: Piece,
    pub color: Color,
}

impl ColoredPiece {
    #[must_use]
    pub const fn new(piece: Piece, color: Color) -> ColoredPiece {
        ColoredPiece { piece, color }
    }

    #[must_use]
    /// Get the single-character code of this piece. White pieces are
    /// uppercase and Black pieces are lowercase.
    pub const fn code(self) -> char {
        let c = self.piece.code();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    #[must_use]
    /// Read a single-character piece code, taking its case as its color.
    pub const fn from_code(c: char) -> Option<ColoredPiece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match Piece::from_code(c.to_ascii_uppercase()) {
            Some(piece) => Some(ColoredPiece { piece, color }),
            None => None,
        }
    }
}

impl Display for ColoredPiece {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that every piece code survives a trip through its character.
    fn codes_are_inverse() {
        for pt in Piece::ALL_TYPES {
            for color in Color::ALL {
                let cp = ColoredPiece::new(pt, color);
                assert_eq!(ColoredPiece::from_code(cp.code()), Some(cp));
            }
        }
    }

    #[test]
    fn case_denotes_color() {
        assert_eq!(
            ColoredPiece::from_code('q'),
            Some(ColoredPiece::new(Piece::Queen, Color::Black))
        );
        assert_eq!(
            ColoredPiece::from_code('N'),
            Some(ColoredPiece::new(Piece::Knight, Color::White))
        );
        assert_eq!(ColoredPiece::from_code('x'), None);
        assert_eq!(ColoredPiece::from_code('3'), None);
    }
}
