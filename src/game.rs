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

//! Persisted games between a student and a bot.
//!
//! A [`GameRecord`] is the unit the portal stores: the position as a FEN
//! record, a human-readable move log, and the game's settings and result.
//! The record is decoded afresh for every move, so nothing but the record
//! needs to survive between requests.

use chrono::{DateTime, Utc};
use fastrand::Rng;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    base::{
        movegen::{apply_move, is_in_check, is_pseudo_legal},
        Color, FenError, Move, Position,
    },
    engine::{make_bot, Bot, Difficulty, MoveChoice},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// The state of a game.
pub enum GameResult {
    /// Moves are still being played.
    InProgress,
    /// White won the game.
    WhiteWins,
    /// Black won the game.
    BlackWins,
    /// The game ended without a winner.
    Draw,
    /// The student left the game unfinished.
    Abandoned,
}

impl GameResult {
    #[must_use]
    /// Get the result in which `color` wins.
    pub const fn win_for(color: Color) -> GameResult {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    #[must_use]
    /// Determine whether the game is finished.
    pub const fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameResult::InProgress => "in progress",
            GameResult::WhiteWins => "white wins",
            GameResult::BlackWins => "black wins",
            GameResult::Draw => "draw",
            GameResult::Abandoned => "abandoned",
        };
        write!(f, "{text}")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// A reason a move could not be played in a game.
pub enum GameError {
    /// The game has already ended.
    #[error("the game is already over ({0})")]
    GameOver(GameResult),
    /// It is not the turn of the side trying to move.
    #[error("it is {0}'s turn to move")]
    NotYourTurn(Color),
    /// The move is not one of the mover's pseudo-legal moves.
    #[error("illegal move {0}")]
    IllegalMove(Move),
    /// The stored position could not be decoded.
    #[error("corrupt game record: {0}")]
    Fen(#[from] FenError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What happened during one request to move.
pub struct Turn {
    /// The student's move, if the student moved.
    pub human_move: Option<Move>,
    /// The bot's reply, if it found one.
    pub bot_move: Option<Move>,
    /// The state of the game once both moves were played.
    pub result: GameResult,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A game as it is persisted between moves.
pub struct GameRecord {
    /// The current position.
    pub fen: String,
    /// Every move played so far, as in `1. e2e4 e7e5 2. g1f3`.
    pub move_log: String,
    /// The strength of the bot.
    pub difficulty: Difficulty,
    /// The color the student plays. The bot plays the other one.
    pub human_color: Color,
    /// The state of the game.
    pub result: GameResult,
    /// When the game was started.
    pub created_at: DateTime<Utc>,
    /// When a move was last played or the game last changed state.
    pub updated_at: DateTime<Utc>,
}

impl GameRecord {
    #[must_use]
    /// Start a new game from the usual starting position.
    pub fn new(difficulty: Difficulty, human_color: Color) -> GameRecord {
        GameRecord::from_position(difficulty, human_color, &Position::default())
    }

    #[must_use]
    /// Start a new game from an arbitrary position.
    pub fn from_position(
        difficulty: Difficulty,
        human_color: Color,
        pos: &Position,
    ) -> GameRecord {
        let now = Utc::now();
        GameRecord {
            fen: pos.to_fen(),
            move_log: String::new(),
            difficulty,
            human_color,
            result: GameResult::InProgress,
            created_at: now,
            updated_at: now,
        }
    }

    /// Decode the current position of this game.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the stored record is not a valid position.
    pub fn position(&self) -> Result<Position, FenError> {
        Position::from_fen(&self.fen)
    }

    #[must_use]
    /// Get the color the bot plays in this game.
    pub fn bot_color(&self) -> Color {
        !self.human_color
    }

    #[must_use]
    /// Construct the opponent for this game.
    pub fn bot(&self) -> Box<dyn Bot> {
        self.bot_with_rng(Rng::new())
    }

    #[must_use]
    /// Construct the opponent for this game with a chosen source of
    /// randomness.
    pub fn bot_with_rng(&self, rng: Rng) -> Box<dyn Bot> {
        make_bot(self.difficulty, self.bot_color(), rng)
    }

    /// Play the student's move `m`, then let `bot` reply if the game goes on.
    ///
    /// # Errors
    ///
    /// Returns an `Err`, leaving the record untouched, if the game is over,
    /// if it is the bot's turn, if `m` is not pseudo-legal or if the stored
    /// position is corrupt.
    pub fn play_human_move(&mut self, m: Move, bot: &mut dyn Bot) -> Result<Turn, GameError> {
        self.ensure_in_progress()?;
        let mut pos = self.position()?;
        if pos.player_to_move != self.human_color {
            return Err(GameError::NotYourTurn(pos.player_to_move));
        }
        if !is_pseudo_legal(&pos, m) {
            warn!("rejected move {m} in position {}", self.fen);
            return Err(GameError::IllegalMove(m));
        }

        if !self.record_move(&mut pos, m) {
            return Err(GameError::IllegalMove(m));
        }
        info!("student played {m}");

        let bot_move = if self.result.is_over() {
            None
        } else {
            self.reply(&mut pos, bot)
        };

        Ok(Turn {
            human_move: Some(m),
            bot_move,
            result: self.result,
        })
    }

    /// Let `bot` move. This is how a game starts when the student plays
    /// Black.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the game is over, if it is the student's turn or if
    /// the stored position is corrupt.
    pub fn play_bot_move(&mut self, bot: &mut dyn Bot) -> Result<Turn, GameError> {
        self.ensure_in_progress()?;
        let mut pos = self.position()?;
        if pos.player_to_move != self.bot_color() {
            return Err(GameError::NotYourTurn(pos.player_to_move));
        }

        let bot_move = self.reply(&mut pos, bot);
        Ok(Turn {
            human_move: None,
            bot_move,
            result: self.result,
        })
    }

    /// Mark the game as abandoned.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the game had already ended.
    pub fn abandon(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.result = GameResult::Abandoned;
        self.updated_at = Utc::now();
        info!("game abandoned after: {}", self.move_log);
        Ok(())
    }

    /// Fail if the game has ended.
    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.result.is_over() {
            return Err(GameError::GameOver(self.result));
        }
        Ok(())
    }

    /// Ask `bot` for a move in `pos` and play it. A bot with nothing to play
    /// loses if its king is attacked and draws otherwise. A move from an empty
    /// square counts as having nothing to play.
    fn reply(&mut self, pos: &mut Position, bot: &mut dyn Bot) -> Option<Move> {
        let bot_color = self.bot_color();
        if bot.color() != bot_color {
            bot.set_color(bot_color);
        }

        if let MoveChoice::Found(m) = bot.get_move(pos) {
            if self.record_move(pos, m) {
                info!("{} bot played {m}", bot.difficulty());
                return Some(m);
            }
            warn!("{} bot chose {m} from an empty square", bot.difficulty());
        }

        self.result = if is_in_check(pos, bot_color) {
            GameResult::win_for(self.human_color)
        } else {
            GameResult::Draw
        };
        self.updated_at = Utc::now();
        info!("{} bot has no moves: {}", bot.difficulty(), self.result);
        None
    }

    /// Apply `m` to `pos`, then bring the stored record and result up to date.
    /// Returns `false`, changing nothing, if `m` starts on an empty square.
    fn record_move(&mut self, pos: &mut Position, m: Move) -> bool {
        let mover = pos.player_to_move;
        let move_number = pos.fullmove_number;
        if !apply_move(pos, m.from, m.to) {
            return false;
        }

        if !self.move_log.is_empty() {
            self.move_log.push(' ');
        }
        if mover == Color::White {
            self.move_log.push_str(&format!("{move_number}. "));
        }
        self.move_log.push_str(&m.to_string());

        self.fen = pos.to_fen();
        self.result = end_condition(pos);
        self.updated_at = Utc::now();
        if self.result.is_over() {
            info!("game over: {} after {}", self.result, self.move_log);
        }
        true
    }
}

#[must_use]
/// Decide whether the game ends in `pos` because a king is attacked.
///
/// With both kings attacked the game is drawn. Otherwise the side whose king
/// is attacked loses.
pub fn end_condition(pos: &Position) -> GameResult {
    match (
        is_in_check(pos, Color::White),
        is_in_check(pos, Color::Black),
    ) {
        (true, true) => GameResult::Draw,
        (true, false) => GameResult::BlackWins,
        (false, true) => GameResult::WhiteWins,
        (false, false) => GameResult::InProgress,
    }
}
