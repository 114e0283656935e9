//! Completion alert background task

use std::time::Duration;
use tokio::{sync::broadcast::error::RecvError, time::sleep};
use tracing::{debug, error, info, warn};

use crate::{
    services::{fire_alert, AlertConfig},
    state::{CountdownController, TimerEvent, TimerPhase},
};

/// Background task that alerts the user when a countdown finishes and then
/// returns the controller to the input form after `grace`
pub async fn completion_alert_task(controller: CountdownController, alert: AlertConfig, grace: Duration) {
    info!("Starting completion alert task");

    let mut events = controller.subscribe_events();

    loop {
        match events.recv().await {
            Ok(TimerEvent::Finished) => {
                if let Err(e) = fire_alert(&alert).await {
                    error!("Failed to fire completion alert: {}", e);
                }

                sleep(grace).await;

                // Leave a countdown the user started during the grace period alone
                if controller.timer_state().phase == TimerPhase::Finished {
                    controller.stop();
                } else {
                    debug!("Countdown left finished state during grace period, not stopping");
                }
            }
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                warn!("Completion alert task skipped {} events", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Timer event channel closed, completion alert task exiting");
                break;
            }
        }
    }
}
