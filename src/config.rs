//! Roster Configuration
//!
//! Query targets and log level for the `player-roster` binary.

use thiserror::Error;
use tracing::Level;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Log level is not one of trace/debug/info/warn/error.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Binary configuration.
#[derive(Clone, Debug)]
pub struct RosterConfig {
    /// Player type for the lowest-runs query.
    pub player_type: String,
    /// Match type for the match-type filter.
    pub match_type: String,
    /// Maximum log level.
    pub log_level: Level,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            player_type: "bat".to_string(),
            match_type: "T20".to_string(),
            log_level: Level::INFO,
        }
    }
}

impl RosterConfig {
    /// Create config from environment variables.
    ///
    /// Unset variables fall back to [`RosterConfig::default`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup("ROSTER_LOG_LEVEL") {
            Some(raw) => parse_level(&raw)?,
            None => defaults.log_level,
        };

        Ok(Self {
            player_type: lookup("ROSTER_PLAYER_TYPE").unwrap_or(defaults.player_type),
            match_type: lookup("ROSTER_MATCH_TYPE").unwrap_or(defaults.match_type),
            log_level,
        })
    }
}

fn parse_level(raw: &str) -> Result<Level, ConfigError> {
    raw.trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))
}
