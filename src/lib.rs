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

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Kibitz, the chess engine behind a study portal's "play the computer"
//! feature.
//!
//! `base` holds the board, the pseudo-legal move generator and FEN records.
//! `engine` holds the material evaluator and the three bots. `game` ties a
//! persisted game record to a bot and applies the end-of-game rules.

pub mod base;
pub mod engine;
pub mod game;

#[cfg(test)]
mod fens;
