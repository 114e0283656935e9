//! Countdown ticker background task

use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::state::CountdownController;

/// Report `total_seconds` down to zero to the controller, one value per second
///
/// The first value is reported immediately. Late ticks are delivered in a
/// burst so that no integer second is skipped. The task ends as soon as the
/// controller no longer recognises `generation` as the active run.
pub async fn countdown_ticker_task(controller: CountdownController, generation: u64, total_seconds: u64) {
    debug!("Ticker run {} started for {}s", generation, total_seconds);

    let mut interval = interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Burst);

    for remaining in (0..=total_seconds).rev() {
        interval.tick().await;
        if !controller.apply_tick(generation, remaining) {
            break;
        }
    }

    debug!("Ticker run {} ended", generation);
}
