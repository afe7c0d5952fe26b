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

//! The medium bot.

use log::debug;

use super::{
    eval::Eval,
    material::{capture_value, evaluate},
    Bot, Difficulty, MoveChoice,
};
use crate::base::{
    movegen::{apply_move, side_moves},
    Color, Move, Position,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A bot which looks a single ply ahead.
///
/// Every move is scored by the material balance after playing it, from the
/// bot's side, plus half the value of whatever it captures. The first move
/// with the highest score is played.
pub struct GreedyBot {
    /// The color this bot plays.
    color: Color,
}

impl GreedyBot {
    #[must_use]
    /// Construct a new greedy bot playing `color`.
    pub const fn new(color: Color) -> GreedyBot {
        GreedyBot { color }
    }

    #[must_use]
    /// Score a single candidate move for this bot.
    pub fn score(&self, pos: &Position, m: Move) -> Eval {
        let mut child = *pos;
        apply_move(&mut child, m.from, m.to);
        evaluate(&child).for_color(self.color) + capture_value(pos, m.to, self.color) / 2
    }
}

impl Bot for GreedyBot {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }

    fn get_move(&mut self, pos: &Position) -> MoveChoice {
        let mut best: Option<(Move, Eval)> = None;
        for m in side_moves(pos, self.color) {
            let score = self.score(pos, m);
            // strict comparison keeps the earliest of equally good moves
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((m, score));
            }
        }

        match best {
            Some((m, score)) => {
                debug!("greedy bot picked {m} with score {score}");
                MoveChoice::Found(m)
            }
            None => MoveChoice::NoneAvailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fens::*;

    #[test]
    /// Test that the greedy bot takes a hanging queen.
    fn takes_the_queen() {
        let pos = Position::from_fen(BLACK_WINS_QUEEN_FEN).unwrap();
        let mut bot = GreedyBot::new(Color::Black);
        assert_eq!(
            bot.get_move(&pos),
            MoveChoice::Found(Move::from_algebraic("a1e1").unwrap())
        );

        let pos = Position::from_fen(WHITE_WINS_QUEEN_FEN).unwrap();
        let mut bot = GreedyBot::new(Color::White);
        assert_eq!(
            bot.get_move(&pos),
            MoveChoice::Found(Move::from_algebraic("a1e1").unwrap())
        );
    }

    #[test]
    fn capture_bonus() {
        let pos = Position::from_fen(BLACK_WINS_QUEEN_FEN).unwrap();
        let bot = GreedyBot::new(Color::Black);
        // the rook is left against the bare king, plus half a queen
        assert_eq!(
            bot.score(&pos, Move::from_algebraic("a1e1").unwrap()),
            Eval::centipawns(500 + 450)
        );
        assert_eq!(
            bot.score(&pos, Move::from_algebraic("a1a2").unwrap()),
            Eval::centipawns(-400)
        );
    }

    #[test]
    /// Test that with no captures in sight, the first generated move wins the
    /// tie.
    fn first_move_wins_ties() {
        let pos = Position::default();
        let mut bot = GreedyBot::new(Color::White);
        let first = side_moves(&pos, Color::White)[0];
        assert_eq!(bot.get_move(&pos), MoveChoice::Found(first));
    }
}
