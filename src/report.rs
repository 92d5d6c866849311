//! Query Report
//!
//! Caller-side rendering of the two roster queries, one output line per
//! value, in the order the reference program prints them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::roster::{PlayerId, RecordCollection};

/// Printed when no record has the requested player type.
pub const NO_SUCH_PLAYER: &str = "No such player";

/// Printed when no record has the requested match type.
pub const NO_MATCH_TYPE_PLAYERS: &str = "No player found for the given match type";

/// Results of running both queries against one roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReport {
    /// Player type that was queried
    pub player_type: String,

    /// Lowest run total for `player_type`, if any record matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_runs: Option<i32>,

    /// Match type that was queried
    pub match_type: String,

    /// Ascending identifiers for `match_type`
    pub match_ids: Vec<PlayerId>,
}

impl QueryReport {
    /// Run both queries against `roster`.
    pub fn run(roster: &RecordCollection, player_type: &str, match_type: &str) -> Self {
        Self {
            player_type: player_type.to_string(),
            lowest_runs: roster.lowest_runs(player_type),
            match_type: match_type.to_string(),
            match_ids: roster.find_by_match_type(match_type),
        }
    }

    /// Output lines: the minimum (or the no-player message), then each id
    /// (or the no-match message).
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(1 + self.match_ids.len().max(1));

        match self.lowest_runs {
            Some(runs) => lines.push(runs.to_string()),
            None => lines.push(NO_SUCH_PLAYER.to_string()),
        }

        if self.match_ids.is_empty() {
            lines.push(NO_MATCH_TYPE_PLAYERS.to_string());
        } else {
            lines.extend(self.match_ids.iter().map(PlayerId::to_string));
        }

        lines
    }
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
