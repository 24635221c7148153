//! Scout command: drive the countdown from a real one-second timer.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::{watchlist::Countdown, Result};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Tick `start` once per `period`, handing every new value to `on_tick`.
///
/// Stops after `max_ticks` ticks when given, otherwise runs until Ctrl-C.
/// Returns the last countdown value.
pub async fn run_countdown<F>(
    start: Countdown,
    period: Duration,
    max_ticks: Option<u64>,
    mut on_tick: F,
) -> Countdown
where
    F: FnMut(Countdown),
{
    let mut countdown = start;
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval completes immediately.
    timer.tick().await;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut ticks = 0u64;
    while max_ticks.map_or(true, |max| ticks < max) {
        tokio::select! {
            _ = timer.tick() => {
                countdown.tick();
                ticks += 1;
                on_tick(countdown);
            }
            _ = &mut shutdown => {
                info!(ticks, "countdown interrupted");
                break;
            }
        }
    }

    countdown
}

pub async fn handle_scout(from: Option<Countdown>, ticks: Option<u64>) -> Result<()> {
    let start = from.unwrap_or_default();
    println!("Next scout in {}", start);

    let last = run_countdown(start, TICK_PERIOD, ticks, |c| {
        // tarpaulin::skip - console output
        if c == Countdown::RESET {
            println!("Scouting now, next scout in {}", c);
        } else {
            println!("Next scout in {}", c);
        }
    })
    .await;

    info!(%last, "countdown stopped");
    Ok(())
}
