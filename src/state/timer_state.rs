//! Timer state structure and management

use serde::{Deserialize, Serialize};

/// Lifecycle phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Timer state for tracking the countdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub phase: TimerPhase,
    /// Seconds left; frozen while paused
    pub remaining_seconds: u64,
    /// Length captured at the most recent start or resume
    pub total_seconds: u64,
}

impl TimerState {
    /// Create an idle timer state
    pub fn new() -> Self {
        Self {
            phase: TimerPhase::Idle,
            remaining_seconds: 0,
            total_seconds: 0,
        }
    }

    /// Enter `Running` with a fresh total
    pub fn begin(&mut self, total_seconds: u64) {
        self.phase = TimerPhase::Running;
        self.total_seconds = total_seconds;
        self.remaining_seconds = total_seconds;
    }

    /// Record a tick; remaining time never goes back up within a run
    pub fn tick(&mut self, remaining_seconds: u64) {
        self.remaining_seconds = self.remaining_seconds.min(remaining_seconds);
        if self.remaining_seconds == 0 {
            self.phase = TimerPhase::Finished;
        }
    }

    pub fn pause(&mut self) {
        self.phase = TimerPhase::Paused;
    }

    pub fn reset(&mut self) {
        self.phase = TimerPhase::Idle;
        self.remaining_seconds = 0;
    }

    /// Check if a countdown is currently ticking
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == TimerPhase::Paused
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
