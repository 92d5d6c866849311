//! Player Record Definitions

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// PLAYER ID
// =============================================================================

/// Player identifier.
///
/// Implements Ord so identifier lists sort ascending. Uniqueness within a
/// collection is the caller's responsibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i32);

impl PlayerId {
    /// Create from a raw integer.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw integer.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for PlayerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PLAYER RECORD
// =============================================================================

/// One player's record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Player identifier
    pub id: PlayerId,

    /// Display name (not used by any query)
    pub name: String,

    /// Run total
    #[serde(rename = "run")]
    pub runs: i32,

    /// Player type, grouped by the lowest-runs query
    #[serde(rename = "type")]
    pub player_type: String,

    /// Match type, filtered by the match-type query
    #[serde(rename = "match")]
    pub match_type: String,
}

impl PlayerRecord {
    /// Create a new record.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        runs: i32,
        player_type: impl Into<String>,
        match_type: impl Into<String>,
    ) -> Self {
        Self {
            id: PlayerId(id),
            name: name.into(),
            runs,
            player_type: player_type.into(),
            match_type: match_type.into(),
        }
    }

    /// Exact, case-sensitive player type match.
    #[inline]
    pub fn is_player_type(&self, player_type: &str) -> bool {
        self.player_type == player_type
    }

    /// Exact, case-sensitive match type match.
    #[inline]
    pub fn is_match_type(&self, match_type: &str) -> bool {
        self.match_type == match_type
    }
}
