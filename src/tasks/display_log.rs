//! Display sink that follows observed values into the log

use tokio::sync::watch;
use tracing::{debug, info};

use crate::state::DisplayState;

/// Log every change of the observed display values until the controller goes away
pub async fn display_log_task(mut display_rx: watch::Receiver<DisplayState>) {
    while display_rx.changed().await.is_ok() {
        let shown = display_rx.borrow_and_update().clone();
        let line = display_line(&shown);

        if shown.show_countdown {
            info!("{}", line);
        } else {
            debug!("{}", line);
        }
    }

    debug!("Display channel closed, display log task exiting");
}

/// One log line for the countdown view or the input form
fn display_line(shown: &DisplayState) -> String {
    if !shown.show_countdown {
        return format!(
            "Input: minutes={:?} seconds={:?}",
            shown.minutes_text, shown.seconds_text
        );
    }

    let mode = if shown.is_pausing {
        "paused"
    } else if shown.urgent {
        "urgent"
    } else {
        "running"
    };
    format!("{} [{}]", shown.time, mode)
}
