//! Observed values pushed to the display

use serde::{Deserialize, Serialize};

use super::{TimerInput, TimerState};
use crate::utils::format_time;

/// Remaining time at or below which the display is flagged urgent
pub const URGENT_THRESHOLD_SECONDS: u32 = 3;

/// Everything a display needs to render the timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub minutes_text: String,
    pub seconds_text: String,
    /// Formatted `MM:SS:00` countdown value
    pub time: String,
    /// Show the running countdown instead of the input form
    pub show_countdown: bool,
    pub is_pausing: bool,
    /// Last few seconds of an active countdown
    pub urgent: bool,
}

impl DisplayState {
    /// Initial display before any countdown has run
    pub fn new() -> Self {
        Self::project(&TimerInput::new(), &TimerState::new(), "00:00:00".to_string(), false)
    }

    /// Build the observed values from the controller's input and timer state
    pub fn project(input: &TimerInput, timer: &TimerState, time: String, show_countdown: bool) -> Self {
        let urgent = show_countdown
            && input.minutes() == 0
            && input.seconds() <= URGENT_THRESHOLD_SECONDS;

        Self {
            minutes_text: input.minutes_text.clone(),
            seconds_text: input.seconds_text.clone(),
            time,
            show_countdown,
            is_pausing: timer.is_paused(),
            urgent,
        }
    }

    /// Formatted time for the current input fields
    pub fn time_for(input: &TimerInput) -> String {
        format_time(input.minutes(), input.seconds())
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
