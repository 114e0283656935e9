//! State management module
//! 
//! This module contains the timer's state structures and the controller that
//! owns and mutates them.

pub mod controller;
pub mod display_state;
pub mod timer_input;
pub mod timer_state;

// Re-export main types
pub use controller::{CountdownController, TimerEvent};
pub use display_state::DisplayState;
pub use timer_input::TimerInput;
pub use timer_state::{TimerPhase, TimerState};
