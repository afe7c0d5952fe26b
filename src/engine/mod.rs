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

//! The computer opponents.
//!
//! Three bots of increasing strength share the [`Bot`] interface:
//!
//! * [`RandomBot`] (easy) picks uniformly among its pseudo-legal moves.
//! * [`GreedyBot`] (medium) looks one ply ahead and favors captures.
//! * [`MinimaxBot`] (hard) runs an alpha-beta search over a random sample of
//!   its moves.
//!
//! None of them know about checkmate: the king is simply a very valuable
//! piece.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::{Color, Move, Position};

pub mod config;
pub mod eval;
pub mod material;

mod greedy;
pub use greedy::GreedyBot;

mod minimax;
pub use minimax::MinimaxBot;

mod random;
pub use random::RandomBot;

#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The outcome of asking a bot for a move.
pub enum MoveChoice {
    /// The bot chose this move.
    Found(Move),
    /// The bot's side has no pseudo-legal move at all.
    NoneAvailable,
}

impl MoveChoice {
    #[must_use]
    /// Convert this choice into an `Option`, with `None` when no move was
    /// available.
    pub const fn into_option(self) -> Option<Move> {
        match self {
            MoveChoice::Found(m) => Some(m),
            MoveChoice::NoneAvailable => None,
        }
    }
}

/// A computer player.
///
/// A bot plays the pieces of its own color, whichever side is to move in the
/// position it is given, and never modifies the caller's position.
pub trait Bot: Send {
    /// Get the color this bot plays.
    fn color(&self) -> Color;

    /// Change the color this bot plays.
    fn set_color(&mut self, color: Color);

    /// Get the difficulty level this bot implements.
    fn difficulty(&self) -> Difficulty;

    /// Choose a move for this bot's color in `pos`.
    fn get_move(&mut self, pos: &Position) -> MoveChoice;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The strength of a bot, as chosen by the student when starting a game.
pub enum Difficulty {
    #[default]
    /// A bot which moves at random.
    Easy,
    /// A bot which grabs material one ply ahead.
    Medium,
    /// A bot which searches a few plies deep.
    Hard,
}

impl Difficulty {
    /// Every difficulty level, from weakest to strongest.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    /// Get the difficulty with the given label. Labels other than `"easy"`,
    /// `"medium"` and `"hard"` fall back to easy.
    pub fn from_label(label: &str) -> Difficulty {
        match label {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    #[must_use]
    /// Get the label of this difficulty.
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Difficulty::from_label(s))
    }
}

#[must_use]
/// Construct a bot of the given difficulty playing `color`, drawing its
/// randomness from `rng`.
pub fn make_bot(difficulty: Difficulty, color: Color, rng: Rng) -> Box<dyn Bot> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomBot::new(color, rng)),
        Difficulty::Medium => Box::new(GreedyBot::new(color)),
        Difficulty::Hard => Box::new(MinimaxBot::new(color, rng)),
    }
}

#[must_use]
/// Construct a bot from a difficulty label. The bot plays Black; callers
/// whose student plays Black must rebind it with [`Bot::set_color`].
pub fn create_bot(label: &str) -> Box<dyn Bot> {
    make_bot(Difficulty::from_label(label), Color::Black, Rng::new())
}
