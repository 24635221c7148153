//! Collaborators outside the view state:
//! - `source`: where watchlist entries come from
//! - `health`: backend API health check

pub mod health;
pub mod source;

pub use health::{get_health, resolve_api_base, HealthStatus};
pub use source::{load_or_sample, load_players, resolve_watchlist_path, sample_players};
