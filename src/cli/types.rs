//! Type-safe wrappers for NBA stats identifiers.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA game identifiers.
///
/// Game IDs are ten-digit strings with significant leading zeros
/// (`"0022300001"`), so they are never treated as numbers.
///
/// # Examples
///
/// ```rust
/// use nba_stats::GameId;
///
/// let game_id = GameId::new("0022300001");
/// assert_eq!(game_id.as_str(), "0022300001");
/// assert_eq!(game_id.to_string(), "0022300001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StatsError::Config {
                message: "game id must not be empty".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Signed distance in days from today used to pick a scoreboard.
///
/// `0` is today, negative values are past days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayOffset(pub i32);

impl DayOffset {
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    /// The offset the daily run collects: the games finished yesterday.
    pub fn yesterday() -> Self {
        Self(-1)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl Default for DayOffset {
    fn default() -> Self {
        Self(0)
    }
}

impl fmt::Display for DayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DayOffset {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for NBA player identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
