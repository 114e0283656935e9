//! Background tasks module
//! 
//! This module contains the countdown ticker and the tasks that observe the
//! controller alongside the HTTP server.

pub mod completion_alert;
pub mod countdown_ticker;
pub mod display_log;

// Re-export main functions
pub use completion_alert::completion_alert_task;
pub use countdown_ticker::countdown_ticker_task;
pub use display_log::display_log_task;
