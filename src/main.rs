//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_watchlist::{
    cli::{Cli, Commands},
    commands::{
        health::handle_health,
        scout::handle_scout,
        show::{handle_show, ShowParams},
    },
    telemetry::init_telemetry,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry();
    let app = Cli::parse();

    match app.command {
        Commands::Show {
            file,
            position,
            sort,
            remove,
            json,
        } => handle_show(ShowParams {
            file,
            filter: position,
            sort,
            remove,
            as_json: json,
        })?,

        Commands::Scout { from, ticks } => handle_scout(from, ticks).await?,

        Commands::Health { api_base } => handle_health(api_base).await?,
    }

    Ok(())
}
