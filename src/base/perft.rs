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

//! Performance tests of the move generator.

use std::time::Instant;

use log::debug;

use super::{
    movegen::{apply_move, side_moves},
    Position,
};

#[must_use]
/// Count the pseudo-legal move sequences of length `depth` from `pos`, and log
/// how quickly they were counted.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    let tic = Instant::now();
    let num_nodes = perft_search(pos, depth);
    let secs = tic.elapsed().as_secs_f64();
    #[allow(clippy::cast_precision_loss)]
    let speed = num_nodes as f64 / secs;
    debug!("perft depth {depth}: {num_nodes} nodes in {secs:.2} secs ({speed:.0} nodes/sec)");

    num_nodes
}

/// The core search algorithm for perft.
fn perft_search(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut total = 0;
    for m in side_moves(pos, pos.player_to_move) {
        let mut pcopy = *pos;
        apply_move(&mut pcopy, m.from, m.to);
        total += perft_search(&pcopy, depth - 1);
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fens::{BOARD_START_FEN, LONE_KING_FEN};

    #[test]
    fn perft_start_position() {
        perft_assistant(BOARD_START_FEN, &[1, 20, 400, 8_902]);
    }

    #[test]
    fn perft_lone_king() {
        // the king's moves are counted even though nobody replies
        perft_assistant(LONE_KING_FEN, &[1, 8, 0]);
    }

    fn perft_assistant(fen: &str, node_counts: &[u64]) {
        let pos = Position::from_fen(fen).unwrap();
        for (i, num) in node_counts.iter().enumerate() {
            assert_eq!(*num, perft(&pos, u8::try_from(i).unwrap()));
        }
    }
}
