//! Countdown Timer - A minute/second countdown with pause, resume and alert
//! 
//! This library provides the countdown controller state machine, the tasks
//! that drive and observe it, and an HTTP surface for commanding it.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{CountdownController, DisplayState, TimerEvent, TimerPhase};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
