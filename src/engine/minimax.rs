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

//! The hard bot: a shallow alpha-beta search.
//!
//! The bot shuffles its moves, keeps the first `root_breadth` of them and
//! searches each to a total depth of `depth` plies. Inside the tree the bot's
//! own side maximizes and its opponent minimizes the material balance, seen
//! from the bot's side. There is no quiescence search, no transposition table
//! and no iterative deepening, so the bot is cheap but easily fooled by
//! exchanges beyond its horizon.

use std::{
    cmp::{max, min},
    time::Instant,
};

use fastrand::Rng;
use log::debug;

use super::{
    config::SearchConfig,
    eval::Eval,
    material::evaluate,
    Bot, Difficulty, MoveChoice,
};
use crate::base::{
    movegen::{apply_move, side_moves},
    Color, Move, Position,
};

#[derive(Debug)]
/// A bot which picks the best of a random sample of moves by minimax search.
pub struct MinimaxBot {
    /// The color this bot plays.
    color: Color,
    /// The search parameters.
    config: SearchConfig,
    /// The source of the root move sample.
    rng: Rng,
    /// The number of nodes visited in the most recent search.
    num_nodes_evaluated: u64,
}

impl MinimaxBot {
    #[must_use]
    /// Construct a new minimax bot playing `color` with the default search
    /// configuration.
    pub fn new(color: Color, rng: Rng) -> MinimaxBot {
        MinimaxBot::with_config(color, rng, SearchConfig::default())
    }

    #[must_use]
    /// Construct a new minimax bot with a custom search configuration.
    pub fn with_config(color: Color, rng: Rng, config: SearchConfig) -> MinimaxBot {
        MinimaxBot {
            color,
            config,
            rng,
            num_nodes_evaluated: 0,
        }
    }

    #[must_use]
    /// Get the search configuration of this bot.
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    #[must_use]
    /// Get the number of nodes visited by the last call to `get_move`.
    pub const fn num_nodes_evaluated(&self) -> u64 {
        self.num_nodes_evaluated
    }

    /// Evaluate `pos` by searching `depth` more plies. `maximizing` is true
    /// when the bot's own side moves next.
    fn minimax(
        &mut self,
        pos: &Position,
        depth: u8,
        alpha_in: Eval,
        beta_in: Eval,
        maximizing: bool,
    ) -> Eval {
        self.num_nodes_evaluated += 1;
        if depth == 0 {
            return evaluate(pos).for_color(self.color);
        }

        let mut alpha = alpha_in;
        let mut beta = beta_in;
        let mover = if maximizing { self.color } else { !self.color };

        // a side with no moves gets the worst score it could have
        let mut evaluation = if maximizing { Eval::MIN } else { Eval::MAX };

        for m in side_moves(pos, mover) {
            let mut child = *pos;
            apply_move(&mut child, m.from, m.to);
            let eval_for_m = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                evaluation = max(evaluation, eval_for_m);
                alpha = max(alpha, eval_for_m);
            } else {
                evaluation = min(evaluation, eval_for_m);
                beta = min(beta, eval_for_m);
            }
            if beta <= alpha {
                break;
            }
        }

        evaluation
    }
}

impl Bot for MinimaxBot {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }

    fn get_move(&mut self, pos: &Position) -> MoveChoice {
        self.num_nodes_evaluated = 0;
        let tic = Instant::now();

        let mut candidates = side_moves(pos, self.color);
        self.rng.shuffle(&mut candidates);
        candidates.truncate(self.config.root_breadth);

        let mut best: Option<(Move, Eval)> = None;
        for m in candidates {
            let mut child = *pos;
            apply_move(&mut child, m.from, m.to);
            let score = self.minimax(
                &child,
                self.config.depth.saturating_sub(1),
                Eval::MIN,
                Eval::MAX,
                false,
            );
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((m, score));
            }
        }

        let secs = tic.elapsed().as_secs_f64();
        match best {
            Some((m, score)) => {
                debug!(
                    "minimax bot picked {m} with score {score} after {} nodes in {secs:.3} secs",
                    self.num_nodes_evaluated
                );
                MoveChoice::Found(m)
            }
            None => MoveChoice::NoneAvailable,
        }
    }
}
