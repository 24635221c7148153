//! FPL Watchlist Library
//!
//! View state behind a Fantasy Premier League transfer-target watchlist:
//! the tracked players, position filter, descending sort and the repeating
//! "next scout" countdown.
//!
//! ## Features
//!
//! - **Filtering**: restrict the visible list to one position or show all
//! - **Stable Sorting**: order by form, price or AI score, ties keep insertion order
//! - **Removal**: idempotent removal by player ID
//! - **Countdown**: a pure hours/minutes/seconds transition that wraps at zero
//! - **Insights**: likely price risers, in-form count, average expected points
//!
//! ## Quick Start
//!
//! ```rust
//! use fpl_watchlist::{core::sample_players, Countdown, FilterCriterion, Position, SortKey, WatchlistState};
//!
//! # fn example() -> fpl_watchlist::Result<()> {
//! let mut state = WatchlistState::new(sample_players(), Countdown::default())?;
//! state.set_filter(FilterCriterion::Only(Position::MID));
//! state.set_sort(SortKey::Form);
//!
//! let names: Vec<_> = state.visible_players().iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Cole Palmer", "Bruno Guimarães"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FPL_WATCHLIST_FILE=~/watchlist.json
//! export FPL_API_BASE=http://localhost:8000
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod telemetry;
pub mod watchlist;

// Re-export commonly used types
pub use cli::types::{FilterCriterion, PlayerId, Position, SortKey};
pub use error::{Result, WatchlistError};
pub use watchlist::{Countdown, Insights, PlayerWatchEntry, Trend, WatchlistState};

pub const WATCHLIST_FILE_ENV_VAR: &str = "FPL_WATCHLIST_FILE";
pub const API_BASE_ENV_VAR: &str = "FPL_API_BASE";
