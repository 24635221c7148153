//! Watchlist view state: the tracked players, the active filter and sort,
//! and the scout countdown.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, warn};

use super::{countdown::Countdown, entry::PlayerWatchEntry};
use crate::{
    cli::types::{FilterCriterion, PlayerId, SortKey},
    error::{Result, WatchlistError},
};

/// Owned state behind the watchlist page.
///
/// Writes go through [`set_filter`](Self::set_filter),
/// [`set_sort`](Self::set_sort), [`add_player`](Self::add_player) and
/// [`remove_player`](Self::remove_player). The list to render is derived on
/// demand by [`visible_players`](Self::visible_players) and never cached.
#[derive(Debug, Clone, Default)]
pub struct WatchlistState {
    players: Vec<PlayerWatchEntry>,
    filter: FilterCriterion,
    sort: SortKey,
    countdown: Countdown,
}

impl WatchlistState {
    /// Build the state from the data source's entries, validating each one
    /// and rejecting duplicate IDs.
    pub fn new(players: Vec<PlayerWatchEntry>, countdown: Countdown) -> Result<Self> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            player.validate()?;
            if !seen.insert(player.id) {
                return Err(WatchlistError::DuplicatePlayer {
                    id: player.id.as_u64(),
                });
            }
        }

        debug!(count = players.len(), %countdown, "watchlist initialised");

        Ok(Self {
            players,
            filter: FilterCriterion::default(),
            sort: SortKey::default(),
            countdown,
        })
    }

    pub fn players(&self) -> &[PlayerWatchEntry] {
        &self.players
    }

    pub fn filter(&self) -> FilterCriterion {
        self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub fn set_filter(&mut self, criterion: FilterCriterion) {
        debug!(from = %self.filter, to = %criterion, "filter changed");
        self.filter = criterion;
    }

    /// Parse and apply a filter selection. State is untouched on error.
    pub fn set_filter_str(&mut self, criterion: &str) -> Result<()> {
        let criterion = criterion.parse()?;
        self.set_filter(criterion);
        Ok(())
    }

    pub fn set_sort(&mut self, key: SortKey) {
        debug!(from = %self.sort, to = %key, "sort changed");
        self.sort = key;
    }

    /// Parse and apply a sort selection. State is untouched on error.
    pub fn set_sort_str(&mut self, key: &str) -> Result<()> {
        let key = key.parse()?;
        self.set_sort(key);
        Ok(())
    }

    /// Append a new entry after validating it against the collection.
    pub fn add_player(&mut self, entry: PlayerWatchEntry) -> Result<()> {
        entry.validate()?;
        if self.contains(entry.id) {
            return Err(WatchlistError::DuplicatePlayer {
                id: entry.id.as_u64(),
            });
        }
        debug!(id = %entry.id, name = %entry.name, "player added");
        self.players.push(entry);
        Ok(())
    }

    /// Remove the entry with `id`, returning it. Unknown IDs are a no-op so
    /// stale or repeated removals are harmless. At most one entry is removed.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<PlayerWatchEntry> {
        match self.players.iter().position(|p| p.id == id) {
            Some(idx) => {
                let removed = self.players.remove(idx);
                debug!(%id, name = %removed.name, "player removed");
                Some(removed)
            }
            None => {
                warn!(%id, "remove requested for player not on the watchlist");
                None
            }
        }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// Entries passing the active filter, ordered by the active sort key,
    /// highest first. Ties keep their order from the underlying collection.
    pub fn visible_players(&self) -> Vec<&PlayerWatchEntry> {
        let mut visible: Vec<&PlayerWatchEntry> = self
            .players
            .iter()
            .filter(|p| self.filter.matches(p.position))
            .collect();

        // `sort_by` is stable, so equal keys stay in collection order.
        let key = self.sort;
        visible.sort_by(|a, b| descending(sort_value(a, key), sort_value(b, key)));
        visible
    }

    /// Advance the scout countdown by one second.
    pub fn tick_countdown(&mut self) -> Countdown {
        self.countdown.tick();
        self.countdown
    }
}

fn sort_value(entry: &PlayerWatchEntry, key: SortKey) -> f64 {
    match key {
        SortKey::Form => entry.form,
        SortKey::Price => entry.price,
        SortKey::AiScore => entry.ai_score,
    }
}

/// Entries are validated finite, so the NaN fallback never fires.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
