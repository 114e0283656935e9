//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::services::AlertConfig;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "countdown-timer")]
#[command(about = "A minute/second countdown timer with pause, resume and completion alert")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Delay between the completion alert and the automatic stop, in milliseconds
    #[arg(long, default_value = "1000")]
    pub grace_ms: u64,

    /// Command to run when a countdown finishes (e.g. a sound player)
    #[arg(long)]
    pub alert_command: Option<String>,

    /// Do not ring the terminal bell on completion
    #[arg(long)]
    pub no_bell: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    pub fn alert_config(&self) -> AlertConfig {
        AlertConfig {
            bell: !self.no_bell,
            command: self.alert_command.clone(),
        }
    }
}
