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

//! The command-line front end of Kibitz.
//!
//! `kibitz play` runs a game against a bot over standard input, `kibitz
//! bestmove` asks a bot for a single decision, and `kibitz perft` counts move
//! paths for debugging the move generator.

#![warn(clippy::pedantic)]

use std::io::{stdin, stdout, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fastrand::Rng;
use log::{debug, info};

use kibitz::{
    base::{movegen::apply_move, perft::perft, Color, Move, Position},
    engine::{make_bot, Difficulty, MoveChoice},
    game::GameRecord,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Play chess against the study portal's bots.
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game against a bot, reading moves such as `e2e4` from stdin.
    Play {
        /// The bot's strength: easy, medium or hard. Anything else means easy.
        #[arg(long, default_value = "easy")]
        difficulty: String,
        /// The color you play.
        #[arg(long, default_value = "white")]
        color: Color,
        /// Start from this position instead of the usual one.
        #[arg(long)]
        fen: Option<String>,
        /// Seed the bot's randomness for a repeatable game.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the move a bot would play for the side to move, and the position
    /// after it.
    Bestmove {
        /// The position to move in.
        #[arg(long)]
        fen: String,
        /// The bot's strength: easy, medium or hard. Anything else means easy.
        #[arg(long, default_value = "easy")]
        difficulty: String,
        /// Seed the bot's randomness for a repeatable answer.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Count the pseudo-legal move paths of a given length.
    Perft {
        /// The position to count from. Defaults to the starting position.
        #[arg(long)]
        fen: Option<String>,
        /// The number of plies to count.
        #[arg(long)]
        depth: u8,
    },
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(args.command) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

/// Run one subcommand.
fn run(command: Command) -> Result<()> {
    match command {
        Command::Play {
            difficulty,
            color,
            fen,
            seed,
        } => play(&difficulty, color, fen.as_deref(), seed),
        Command::Bestmove {
            fen,
            difficulty,
            seed,
        } => bestmove(&fen, &difficulty, seed),
        Command::Perft { fen, depth } => {
            let pos = load_position(fen.as_deref())?;
            println!("{}", perft(&pos, depth));
            Ok(())
        }
    }
}

/// Decode `fen`, or give the starting position if there is none.
fn load_position(fen: Option<&str>) -> Result<Position> {
    match fen {
        Some(fen) => Position::from_fen(fen).with_context(|| format!("could not load `{fen}`")),
        None => Ok(Position::default()),
    }
}

/// Construct the bot's source of randomness.
fn make_rng(seed: Option<u64>) -> Rng {
    seed.map_or_else(Rng::new, Rng::with_seed)
}

/// Answer a single stateless request for a move.
fn bestmove(fen: &str, difficulty: &str, seed: Option<u64>) -> Result<()> {
    let mut pos = load_position(Some(fen))?;
    let difficulty = Difficulty::from_label(difficulty);
    let mut bot = make_bot(difficulty, pos.player_to_move, make_rng(seed));
    debug!("asking the {difficulty} bot to move for {}", pos.player_to_move);

    match bot.get_move(&pos) {
        MoveChoice::Found(m) => {
            apply_move(&mut pos, m.from, m.to);
            println!("{m}");
            println!("{}", pos.to_fen());
        }
        MoveChoice::NoneAvailable => println!("none"),
    }

    Ok(())
}

/// Play an interactive game over stdin.
fn play(difficulty: &str, color: Color, fen: Option<&str>, seed: Option<u64>) -> Result<()> {
    let start = load_position(fen)?;
    let mut game = GameRecord::from_position(Difficulty::from_label(difficulty), color, &start);
    let mut bot = game.bot_with_rng(make_rng(seed));
    info!(
        "new {} game, you play {}",
        game.difficulty, game.human_color
    );

    if start.player_to_move == game.bot_color() {
        let turn = game.play_bot_move(bot.as_mut())?;
        report_bot_move(turn.bot_move);
    }

    let mut lines = stdin().lock().lines();
    while !game.result.is_over() {
        println!("{}", game.position()?);
        print!("{}> ", game.human_color);
        stdout().flush()?;

        let Some(line) = lines.next() else {
            // end of input leaves the game unfinished
            game.abandon()?;
            break;
        };
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" => game.abandon()?,
            "fen" => println!("{}", game.fen),
            "log" => println!("{}", game.move_log),
            text => match text.parse::<Move>() {
                Ok(m) => match game.play_human_move(m, bot.as_mut()) {
                    Ok(turn) => report_bot_move(turn.bot_move),
                    Err(e) => println!("{e}"),
                },
                Err(e) => println!("{e}"),
            },
        }
    }

    println!("{}", game.position()?);
    println!("result: {}", game.result);
    println!("{}", serde_json::to_string_pretty(&game)?);

    Ok(())
}

/// Tell the student what the bot did.
fn report_bot_move(bot_move: Option<Move>) {
    if let Some(m) = bot_move {
        println!("bot plays {m}");
    }
}
