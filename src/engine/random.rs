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

//! The easy bot.

use fastrand::Rng;
use log::debug;

use super::{Bot, Difficulty, MoveChoice};
use crate::base::{movegen::side_moves, Color, Position};

#[derive(Debug)]
/// A bot which plays a uniformly random pseudo-legal move.
pub struct RandomBot {
    /// The color this bot plays.
    color: Color,
    /// The source of this bot's choices.
    rng: Rng,
}

impl RandomBot {
    #[must_use]
    /// Construct a new random bot playing `color`.
    pub fn new(color: Color, rng: Rng) -> RandomBot {
        RandomBot { color, rng }
    }
}

impl Bot for RandomBot {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }

    fn get_move(&mut self, pos: &Position) -> MoveChoice {
        let moves = side_moves(pos, self.color);
        if moves.is_empty() {
            return MoveChoice::NoneAvailable;
        }
        let m = moves[self.rng.usize(..moves.len())];
        debug!("random bot picked {m} out of {} moves", moves.len());
        MoveChoice::Found(m)
    }
}
