//! Watchlist view state and the values it is built from.
//!
//! - `entry`: tracked player records and their invariants
//! - `state`: filter/sort selections, removal and the derived visible list
//! - `countdown`: the repeating "next scout" countdown
//! - `insights`: summary figures over the tracked collection

pub mod countdown;
pub mod entry;
pub mod insights;
pub mod state;


pub use countdown::Countdown;
pub use entry::{PlayerWatchEntry, Trend};
pub use insights::Insights;
pub use state::WatchlistState;
