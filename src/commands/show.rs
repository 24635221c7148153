//! Show command: render the watchlist for a filter and sort selection.

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    cli::types::{FilterCriterion, PlayerId, SortKey},
    core::source::load_or_sample,
    watchlist::{Countdown, Insights, PlayerWatchEntry, Trend, WatchlistState},
    Result,
};

/// Parameters for the show command.
///
/// # Examples
///
/// ```rust
/// use fpl_watchlist::{commands::show::ShowParams, FilterCriterion, Position, SortKey};
///
/// let params = ShowParams {
///     file: None,
///     filter: FilterCriterion::Only(Position::MID),
///     sort: SortKey::Form,
///     remove: vec![],
///     as_json: false,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ShowParams {
    pub file: Option<PathBuf>,
    pub filter: FilterCriterion,
    pub sort: SortKey,
    pub remove: Vec<PlayerId>,
    pub as_json: bool,
}

/// Everything the show command prints, in one serializable payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistView {
    pub filter: FilterCriterion,
    pub sort: SortKey,
    pub players: Vec<PlayerWatchEntry>,
    pub insights: Insights,
    pub next_scout: String,
}

/// Load the watchlist, apply removals, then filter and sort.
pub fn build_view(params: &ShowParams) -> Result<WatchlistView> {
    let players = load_or_sample(params.file.clone())?;
    let mut state = WatchlistState::new(players, Countdown::default())?;

    for id in &params.remove {
        state.remove_player(*id);
    }
    state.set_filter(params.filter);
    state.set_sort(params.sort);

    Ok(WatchlistView {
        filter: state.filter(),
        sort: state.sort(),
        players: state.visible_players().into_iter().cloned().collect(),
        insights: Insights::from_players(state.players()),
        next_scout: state.countdown().to_string(),
    })
}

/// One text line per player.
pub fn format_player_line(player: &PlayerWatchEntry) -> String {
    let trend = match player.trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Flat => "→",
    };
    let change = if player.price_change > 0.0 {
        format!("+£{:.1}M", player.price_change)
    } else if player.price_change < 0.0 {
        format!("-£{:.1}M", player.price_change.abs())
    } else {
        "no change".to_string()
    };
    let fixtures = player
        .fixtures()
        .map(|(label, fdr)| format!("{}[{}]", label, fdr))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{} {} ({}, {}) £{:.1}M {} | form {:.1} {} | own {:.1}% | AI {:.0} | rise {:.0}% | xP {:.0} | {}",
        player.id,
        player.name,
        player.position,
        player.team,
        player.price,
        change,
        player.form,
        trend,
        player.ownership,
        player.ai_score,
        player.price_rise_probability,
        player.expected_points,
        fixtures,
    )
}

pub fn handle_show(params: ShowParams) -> Result<()> {
    let view = build_view(&params)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&view)?); // tarpaulin::skip
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!(
        "{} sorted by {} (next scout in {})",
        view.filter.label(),
        view.sort.label(),
        view.next_scout
    );
    if view.players.is_empty() {
        println!("No players match this filter");
    }
    for player in &view.players {
        println!("{}", format_player_line(player));
        if !player.latest_news.is_empty() {
            println!("    {}", player.latest_news);
        }
    }

    let insights = &view.insights;
    println!();
    println!(
        "{} players likely to rise{}",
        insights.likely_risers.len(),
        if insights.likely_risers.is_empty() {
            String::new()
        } else {
            format!(": {}", insights.likely_risers.join(", "))
        }
    );
    println!("{} players in excellent form", insights.in_form_count);
    if let Some(avg) = insights.average_expected_points {
        println!("Average predicted points: {} per player", avg);
    }

    Ok(())
}
