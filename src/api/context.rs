//! Shared state handed to the HTTP handlers

use std::time::Instant;

use crate::state::CountdownController;

/// Controller handle plus server metadata
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub controller: CountdownController,
    pub start_time: Instant,
}

impl ApiContext {
    pub fn new(controller: CountdownController) -> Self {
        Self {
            controller,
            start_time: Instant::now(),
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }
}

fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
