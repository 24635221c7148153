//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::watchlist::Countdown;
use types::{FilterCriterion, PlayerId, SortKey};

#[derive(Debug, Parser)]
#[clap(name = "fpl-watchlist", about = "FPL transfer-target watchlist")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show tracked players for a position filter and sort order.
    Show {
        /// Watchlist JSON file (or set `FPL_WATCHLIST_FILE`). Falls back to the sample squad.
        #[clap(long, short)]
        file: Option<PathBuf>,

        /// Position filter: all, gk, def, mid or fwd.
        #[clap(long, short, default_value_t = FilterCriterion::All)]
        position: FilterCriterion,

        /// Sort key, always descending: form, price or ai.
        #[clap(long, short, default_value_t = SortKey::Form)]
        sort: SortKey,

        /// Remove a player by ID before rendering (repeatable): `-r 2 -r 3`.
        #[clap(long, short)]
        remove: Vec<PlayerId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Run the next-scout countdown, printing once per second.
    Scout {
        /// Starting value as HH:MM:SS (defaults to 07:23:45).
        #[clap(long)]
        from: Option<Countdown>,

        /// Stop after this many ticks instead of running until Ctrl-C.
        #[clap(long)]
        ticks: Option<u64>,
    },

    /// Check that the backend API is reachable.
    Health {
        /// API base URL (or set `FPL_API_BASE`).
        #[clap(long)]
        api_base: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Position;

    #[test]
    fn test_show_defaults() {
        let cli = Cli::try_parse_from(["fpl-watchlist", "show"]).unwrap();
        match cli.command {
            Commands::Show {
                file,
                position,
                sort,
                remove,
                json,
            } => {
                assert!(file.is_none());
                assert_eq!(position, FilterCriterion::All);
                assert_eq!(sort, SortKey::Form);
                assert!(remove.is_empty());
                assert!(!json);
            }
            other => panic!("Expected show command, got {:?}", other),
        }
    }

    #[test]
    fn test_show_with_selections() {
        let cli = Cli::try_parse_from([
            "fpl-watchlist", "show", "-p", "mid", "-s", "ai", "-r", "2", "-r", "3", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Show {
                position,
                sort,
                remove,
                json,
                ..
            } => {
                assert_eq!(position, FilterCriterion::Only(Position::MID));
                assert_eq!(sort, SortKey::AiScore);
                assert_eq!(remove, vec![PlayerId::new(2), PlayerId::new(3)]);
                assert!(json);
            }
            other => panic!("Expected show command, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_position_rejected() {
        assert!(Cli::try_parse_from(["fpl-watchlist", "show", "-p", "striker"]).is_err());
        assert!(Cli::try_parse_from(["fpl-watchlist", "show", "-s", "minutes"]).is_err());
    }

    #[test]
    fn test_scout_parses_countdown() {
        let cli =
            Cli::try_parse_from(["fpl-watchlist", "scout", "--from", "00:00:05", "--ticks", "5"])
                .unwrap();
        match cli.command {
            Commands::Scout { from, ticks } => {
                assert_eq!(from, Some(Countdown::new(0, 0, 5).unwrap()));
                assert_eq!(ticks, Some(5));
            }
            other => panic!("Expected scout command, got {:?}", other),
        }
        assert!(Cli::try_parse_from(["fpl-watchlist", "scout", "--from", "13:00:00"]).is_err());
    }
}
