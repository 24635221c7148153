//! Fantasy Premier League position types.

use crate::error::WatchlistError;
use std::fmt;
use std::str::FromStr;

/// Playing positions used by Fantasy Premier League.
///
/// Every squad member has exactly one of these; there are no flexible or
/// roster-slot positions in FPL.
///
/// # Examples
///
/// ```rust
/// use fpl_watchlist::Position;
///
/// let mid: Position = "mid".parse().unwrap();
/// assert_eq!(mid, Position::MID);
/// assert_eq!(mid.to_string(), "MID");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
}

impl Position {
    /// Plural label used for position filter buttons.
    pub fn plural_label(&self) -> &'static str {
        match self {
            Position::GK => "Goalkeepers",
            Position::DEF => "Defenders",
            Position::MID => "Midfielders",
            Position::FWD => "Forwards",
        }
    }
}

serde_via_str!(Position);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = WatchlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "GKP" => Ok(Position::GK),
            "DEF" => Ok(Position::DEF),
            "MID" => Ok(Position::MID),
            "FWD" => Ok(Position::FWD),
            _ => Err(WatchlistError::InvalidArgument {
                kind: "position",
                value: s.to_string(),
            }),
        }
    }
}
