//! Watchlist data source.
//!
//! Entries come from a JSON file when one is configured, otherwise from the
//! built-in sample squad. The file is only ever read.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    cli::types::{PlayerId, Position},
    watchlist::{PlayerWatchEntry, Trend},
    Result, WATCHLIST_FILE_ENV_VAR,
};

/// Path: <config_dir>/fpl-watchlist/watchlist.json
pub fn default_watchlist_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("fpl-watchlist").join("watchlist.json")
}

/// Decide which watchlist file to read.
///
/// An explicit path wins, then `FPL_WATCHLIST_FILE`, then the default config
/// location if a file exists there. `None` means use the sample squad.
pub fn resolve_watchlist_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path);
    }

    if let Ok(from_env) = std::env::var(WATCHLIST_FILE_ENV_VAR) {
        if !from_env.trim().is_empty() {
            return Some(PathBuf::from(from_env));
        }
    }

    let default = default_watchlist_path();
    if default.is_file() {
        Some(default)
    } else {
        None
    }
}

/// Read a JSON array of watchlist entries.
pub fn load_players(path: &Path) -> Result<Vec<PlayerWatchEntry>> {
    let contents = fs::read_to_string(path)?;
    let players: Vec<PlayerWatchEntry> = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), count = players.len(), "watchlist file parsed");
    Ok(players)
}

/// Load entries from the resolved path, or fall back to the sample squad.
pub fn load_or_sample(explicit: Option<PathBuf>) -> Result<Vec<PlayerWatchEntry>> {
    match resolve_watchlist_path(explicit) {
        Some(path) => {
            info!(path = %path.display(), "loading watchlist");
            load_players(&path)
        }
        None => {
            info!("no watchlist file configured, using sample squad");
            Ok(sample_players())
        }
    }
}

fn fixtures(labels: [&str; 3]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

/// The four-player sample squad shown on a fresh watchlist.
pub fn sample_players() -> Vec<PlayerWatchEntry> {
    vec![
        PlayerWatchEntry {
            id: PlayerId::new(1),
            name: "Cole Palmer".to_string(),
            team: "CHE".to_string(),
            position: Position::MID,
            price: 7.5,
            price_change: 0.1,
            ownership: 28.3,
            form: 8.2,
            next_fixtures: fixtures(["bou (H)", "WOL (A)", "cry (H)"]),
            difficulty: vec![2, 2, 3],
            expected_points: 28.0,
            trend: Trend::Up,
            ai_score: 94.0,
            price_rise_probability: 85.0,
            latest_news: "Confirmed fit after minor knock, expected to start vs Bournemouth"
                .to_string(),
        },
        PlayerWatchEntry {
            id: PlayerId::new(2),
            name: "Darwin Núñez".to_string(),
            team: "LIV".to_string(),
            position: Position::FWD,
            price: 7.0,
            price_change: -0.1,
            ownership: 15.2,
            form: 6.5,
            next_fixtures: fixtures(["MCI (A)", "che (H)", "ARS (A)"]),
            difficulty: vec![5, 4, 4],
            expected_points: 18.0,
            trend: Trend::Down,
            ai_score: 72.0,
            price_rise_probability: 25.0,
            latest_news: "Klopp hints at rotation, but likely to feature against City".to_string(),
        },
        PlayerWatchEntry {
            id: PlayerId::new(3),
            name: "Pedro Porro".to_string(),
            team: "TOT".to_string(),
            position: Position::DEF,
            price: 5.5,
            price_change: 0.0,
            ownership: 12.8,
            form: 7.1,
            next_fixtures: fixtures(["new (H)", "EVE (A)", "bha (H)"]),
            difficulty: vec![3, 2, 2],
            expected_points: 22.0,
            trend: Trend::Up,
            ai_score: 85.0,
            price_rise_probability: 65.0,
            latest_news: "Impressed in training, Postecoglou praises defensive work".to_string(),
        },
        PlayerWatchEntry {
            id: PlayerId::new(4),
            name: "Bruno Guimarães".to_string(),
            team: "NEW".to_string(),
            position: Position::MID,
            price: 6.0,
            price_change: 0.2,
            ownership: 18.9,
            form: 7.8,
            next_fixtures: fixtures(["tot (A)", "BUR (H)", "whu (H)"]),
            difficulty: vec![4, 2, 2],
            expected_points: 25.0,
            trend: Trend::Up,
            ai_score: 88.0,
            price_rise_probability: 78.0,
            latest_news: "Captain armband secured, penalty duties confirmed".to_string(),
        },
    ]
}
