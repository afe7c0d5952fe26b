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

//! Conversion between positions and their six-field FEN records.
//!
//! The record is what the game store persists, so `to_fen` must produce
//! exactly the text below and `from_fen` must read it back to an identical
//! position:
//!
//! ```text
//! rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2
//! ```
//!
//! Ranks are written from row 0 (rank 8) down, and runs of empty squares are
//! written as a single digit.

use super::{CastleRights, Color, ColoredPiece, FenError, Position, Square};

impl Position {
    /// Load a position from a FEN record.
    ///
    /// Trailing fields may be left off. A missing side to move means White,
    /// missing castling rights mean none, and the move counters default to 0
    /// and 1.
    ///
    /// # Errors
    ///
    /// Returns an `Err` describing the first field that could not be read.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let mut pos = Position::empty();
        let mut fields = fen.split_whitespace();

        let board_field = fields.next().ok_or(FenError::Empty)?;
        let ranks: Vec<&str> = board_field.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;
            for chr in rank.chars() {
                if let Some(n) = chr.to_digit(10) {
                    // a digit counts blank squares
                    col += n as usize;
                } else {
                    let cp = ColoredPiece::from_code(chr).ok_or(FenError::PieceCode(chr))?;
                    let sq = Square::from_index(row * 8 + col)
                        .filter(|_| col < 8)
                        .ok_or(FenError::RankWidth(row))?;
                    pos.set_piece(sq, Some(cp));
                    col += 1;
                }
                if col > 8 {
                    return Err(FenError::RankWidth(row));
                }
            }
            if col != 8 {
                return Err(FenError::RankWidth(row));
            }
        }

        if let Some(side) = fields.next() {
            pos.player_to_move = match side {
                "w" => Color::White,
                "b" => Color::Black,
                _ => return Err(FenError::SideToMove(side.to_string())),
            };
        }

        if let Some(castling) = fields.next() {
            if castling != "-" {
                for c in castling.chars() {
                    pos.castle_rights |=
                        CastleRights::from_code(c).ok_or(FenError::CastleRights(c))?;
                }
            }
        }

        if let Some(ep) = fields.next() {
            if ep != "-" {
                pos.en_passant_square = Some(Square::from_algebraic(ep)?);
            }
        }

        if let Some(clock) = fields.next() {
            pos.halfmove_clock = parse_counter(clock)?;
        }

        if let Some(number) = fields.next() {
            pos.fullmove_number = parse_counter(number)?;
        }

        Ok(pos)
    }

    #[must_use]
    /// Write this position as a six-field FEN record.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for row in 0..8 {
            if row > 0 {
                fen.push('/');
            }
            let mut num_blanks = 0;
            for col in 0..8 {
                match Square::new(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(cp) => {
                        if num_blanks > 0 {
                            fen.push_str(&num_blanks.to_string());
                            num_blanks = 0;
                        }
                        fen.push(cp.code());
                    }
                    None => num_blanks += 1,
                }
            }
            if num_blanks > 0 {
                fen.push_str(&num_blanks.to_string());
            }
        }

        let ep = self
            .en_passant_square
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        fen.push_str(&format!(
            " {} {} {ep} {} {}",
            self.player_to_move.fen_code(),
            self.castle_rights,
            self.halfmove_clock,
            self.fullmove_number
        ));

        fen
    }
}

/// Read one of the two move counters at the end of a record.
fn parse_counter(s: &str) -> Result<u32, FenError> {
    s.parse().map_err(|_| FenError::Counter(s.to_string()))
}
