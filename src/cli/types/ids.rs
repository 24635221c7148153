//! ID types for tracked players.

use crate::error::{Result, WatchlistError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for watchlist player IDs.
///
/// # Examples
///
/// ```rust
/// use fpl_watchlist::PlayerId;
///
/// let id = PlayerId::new(4);
/// assert_eq!(id.as_u64(), 4);
/// assert_eq!(id.to_string(), "4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = WatchlistError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| WatchlistError::InvalidArgument {
                kind: "player id",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_parse() {
        assert_eq!("12".parse::<PlayerId>().unwrap(), PlayerId::new(12));
        assert!("-1".parse::<PlayerId>().is_err());
        assert!("abc".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_player_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&PlayerId::new(9)).unwrap(), "9");
        let id: PlayerId = serde_json::from_str("3").unwrap();
        assert_eq!(id, PlayerId::new(3));
    }
}
