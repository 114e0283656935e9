//! External side effects module
//! 
//! This module contains the alert fired toward the user when a countdown
//! completes.

pub mod alert;

// Re-export main functions
pub use alert::*;
