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

//! Positions: the board together with the side to move and the bookkeeping
//! fields that travel with it in a position record.

use super::{CastleRights, Color, ColoredPiece, Piece, Square};

use std::{
    default::Default,
    fmt::{Display, Formatter},
    ops::Index,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A representation of a position. It holds no history; whoever owns the game
/// keeps the move list if one is needed.
///
/// `Position` is a plain 64-cell array plus a few small fields, so copying one
/// is cheap. Search relies on this to simulate moves on throwaway copies.
pub struct Position {
    /// The contents of each square, in row-major order starting from row 0
    /// (rank 8).
    board: [Option<ColoredPiece>; Square::NUM],
    /// The color of the player to move.
    pub player_to_move: Color,
    /// The rights of each player for castling.
    pub castle_rights: CastleRights,
    /// The square passed over by a pawn which advanced two squares on the
    /// previous move. `None` after any other move.
    pub en_passant_square: Option<Square>,
    /// Halfmove clock, carried through from the position record.
    pub halfmove_clock: u32,
    /// Fullmove number. Starts at 1 and increases after each Black move.
    pub fullmove_number: u32,
}

impl Position {
    /// Create an empty board with no pieces or castle rights. White is to
    /// move.
    #[must_use]
    pub const fn empty() -> Position {
        Position {
            board: [None; Square::NUM],
            player_to_move: Color::White,
            castle_rights: CastleRights::NO_RIGHTS,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the piece occupying a given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.board[sq.index()]
    }

    #[inline(always)]
    #[must_use]
    /// Get the type of the piece occupying a given square.
    /// Returns `None` if there are no pieces occupying the square.
    pub fn type_at_square(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()].map(|cp| cp.piece)
    }

    #[inline(always)]
    #[must_use]
    /// Get the color of a piece occupying a given square.
    /// Returns `None` if there are no pieces occupying the square.
    pub fn color_at_square(&self, sq: Square) -> Option<Color> {
        self.board[sq.index()].map(|cp| cp.color)
    }

    #[inline(always)]
    /// Set the contents of a square. Passing `None` clears it.
    pub fn set_piece(&mut self, sq: Square, piece: Option<ColoredPiece>) {
        self.board[sq.index()] = piece;
    }

    /// Iterate over every occupied square together with its piece, row by
    /// row starting from row 0.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|cp| (sq, cp)))
    }

    #[must_use]
    /// Find the king of the given color. If there is more than one, the first
    /// found in row order is returned.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = ColoredPiece::new(Piece::King, color);
        self.pieces()
            .find(|&(_, cp)| cp == king)
            .map(|(sq, _)| sq)
    }
}

impl Index<Square> for Position {
    type Output = Option<ColoredPiece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.board[sq.index()]
    }
}

impl Display for Position {
    /// Display this position in a console-ready format. Expresses as a series
    /// of 8 lines, where the topmost line is the 8th rank and the bottommost
    /// is the 1st. White pieces are represented with capital letters, while
    /// black pieces have lowercase.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.board.iter().enumerate() {
            if i % 8 == 0 {
                write!(f, "{} ", 8 - i / 8)?;
            }
            match cell {
                Some(cp) => write!(f, "{cp}")?,
                None => write!(f, ".")?,
            }
            if i % 8 == 7 {
                writeln!(f)?;
            } else {
                write!(f, " ")?;
            }
        }
        writeln!(f, "  a b c d e f g h")
    }
}

impl Default for Position {
    /// The standard starting position, with White to move.
    fn default() -> Position {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let mut pos = Position::empty();
        for (col, &pt) in BACK_RANK.iter().enumerate() {
            pos.board[col] = Some(ColoredPiece::new(pt, Color::Black));
            pos.board[8 + col] = Some(ColoredPiece::new(Piece::Pawn, Color::Black));
            pos.board[48 + col] = Some(ColoredPiece::new(Piece::Pawn, Color::White));
            pos.board[56 + col] = Some(ColoredPiece::new(pt, Color::White));
        }
        pos.castle_rights = CastleRights::ALL_RIGHTS;
        pos
    }
}
