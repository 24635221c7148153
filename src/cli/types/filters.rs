//! Filter and sort selections for the watchlist view.

use super::position::Position;
use crate::error::WatchlistError;
use std::fmt;
use std::str::FromStr;

/// Position-based predicate restricting which watchlist entries are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterCriterion {
    /// Every tracked player passes
    #[default]
    All,
    /// Only players playing the given position
    Only(Position),
}

impl FilterCriterion {
    /// Every selectable criterion, in the order the filter bar lists them.
    pub const OPTIONS: [FilterCriterion; 5] = [
        FilterCriterion::All,
        FilterCriterion::Only(Position::GK),
        FilterCriterion::Only(Position::DEF),
        FilterCriterion::Only(Position::MID),
        FilterCriterion::Only(Position::FWD),
    ];

    pub fn matches(&self, position: Position) -> bool {
        match self {
            FilterCriterion::All => true,
            FilterCriterion::Only(p) => *p == position,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterCriterion::All => "All Positions",
            FilterCriterion::Only(p) => p.plural_label(),
        }
    }
}

impl From<Position> for FilterCriterion {
    fn from(position: Position) -> Self {
        FilterCriterion::Only(position)
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterCriterion::All => write!(f, "ALL"),
            FilterCriterion::Only(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for FilterCriterion {
    type Err = WatchlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(FilterCriterion::All);
        }
        s.parse::<Position>()
            .map(FilterCriterion::Only)
            .map_err(|_| WatchlistError::InvalidArgument {
                kind: "position filter",
                value: s.to_string(),
            })
    }
}

/// Field used to order visible entries. Ordering is always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Form,
    Price,
    AiScore,
}

impl SortKey {
    pub const OPTIONS: [SortKey; 3] = [SortKey::Form, SortKey::Price, SortKey::AiScore];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Form => "Form",
            SortKey::Price => "Price",
            SortKey::AiScore => "AI Score",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Form => "form",
            SortKey::Price => "price",
            SortKey::AiScore => "ai",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortKey {
    type Err = WatchlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "form" => Ok(SortKey::Form),
            "price" => Ok(SortKey::Price),
            "ai" | "ai-score" | "ai_score" => Ok(SortKey::AiScore),
            _ => Err(WatchlistError::InvalidArgument {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

serde_via_str!(FilterCriterion);
serde_via_str!(SortKey);
