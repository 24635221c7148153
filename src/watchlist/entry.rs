//! Tracked player records.

use crate::{
    cli::types::{PlayerId, Position},
    error::{Result, WatchlistError},
};
use serde::{Deserialize, Serialize};

/// Direction of a player's recent form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

/// One player on the watchlist, as supplied by the data source.
///
/// Field names serialize in camelCase so fixture files match the dashboard's
/// JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWatchEntry {
    pub id: PlayerId,
    pub name: String,
    /// Three-letter club code, e.g. `CHE`
    pub team: String,
    pub position: Position,
    /// Price in millions
    pub price: f64,
    /// Most recent price movement in millions. Opaque, supplied by the source.
    #[serde(default)]
    pub price_change: f64,
    /// Percentage of managers owning the player, 0-100
    pub ownership: f64,
    pub form: f64,
    /// Opponent labels for the upcoming gameweeks, e.g. `"bou (H)"`
    pub next_fixtures: Vec<String>,
    /// Fixture difficulty ratings (1-5), one per entry in `next_fixtures`
    pub difficulty: Vec<u8>,
    pub expected_points: f64,
    #[serde(default)]
    pub trend: Trend,
    /// AI desirability score, 0-100
    pub ai_score: f64,
    /// Probability of a price rise, 0-100
    pub price_rise_probability: f64,
    #[serde(default)]
    pub latest_news: String,
}

impl PlayerWatchEntry {
    /// Upcoming fixtures paired with their difficulty rating.
    pub fn fixtures(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.next_fixtures
            .iter()
            .map(String::as_str)
            .zip(self.difficulty.iter().copied())
    }

    /// Check the per-entry invariants. Uniqueness across a collection is
    /// checked by the owner of the collection.
    pub fn validate(&self) -> Result<()> {
        let id = self.id.as_u64();

        if self.name.trim().is_empty() {
            return Err(WatchlistError::invalid_entry(id, "name is empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(WatchlistError::invalid_entry(
                id,
                format!("price {} must be a non-negative number", self.price),
            ));
        }
        if !self.form.is_finite() || self.form < 0.0 {
            return Err(WatchlistError::invalid_entry(
                id,
                format!("form {} must be a non-negative number", self.form),
            ));
        }
        check_percentage(id, "ownership", self.ownership)?;
        check_percentage(id, "aiScore", self.ai_score)?;
        check_percentage(id, "priceRiseProbability", self.price_rise_probability)?;

        if !self.expected_points.is_finite() {
            return Err(WatchlistError::invalid_entry(
                id,
                "expectedPoints must be a finite number",
            ));
        }
        if self.next_fixtures.len() != self.difficulty.len() {
            return Err(WatchlistError::invalid_entry(
                id,
                format!(
                    "{} fixtures but {} difficulty ratings",
                    self.next_fixtures.len(),
                    self.difficulty.len()
                ),
            ));
        }
        if let Some(bad) = self.difficulty.iter().find(|d| !(1..=5).contains(*d)) {
            return Err(WatchlistError::invalid_entry(
                id,
                format!("difficulty rating {} outside 1-5", bad),
            ));
        }

        Ok(())
    }
}

fn check_percentage(id: u64, field: &str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(WatchlistError::invalid_entry(
            id,
            format!("{} {} outside 0-100", field, value),
        ))
    }
}
