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

//! Tunable parameters of the minimax search.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Configuration options for a search.
pub struct SearchConfig {
    /// The total number of plies searched, counting the bot's own first move.
    pub depth: u8,
    /// The number of randomly chosen root moves which are searched at all.
    /// The rest are ignored for this decision.
    pub root_breadth: usize,
}

impl SearchConfig {
    #[must_use]
    /// Construct a new search configuration with the values used by the hard
    /// bot.
    pub const fn new() -> SearchConfig {
        SearchConfig {
            depth: 3,
            root_breadth: 15,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::new()
    }
}
