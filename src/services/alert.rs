//! Haptic/audio cue fired when a countdown reaches zero

use tokio::{io::AsyncWriteExt, process::Command};
use tracing::{debug, info, warn};

/// How the user is alerted on completion
#[derive(Debug, Clone, Default)]
pub struct AlertConfig {
    /// Ring the terminal bell
    pub bell: bool,
    /// External command to run, split on whitespace (e.g. a sound player)
    pub command: Option<String>,
}

/// Fire the completion alert
///
/// The alert command runs in its own task; this returns without waiting for it.
pub async fn fire_alert(config: &AlertConfig) -> Result<(), String> {
    info!("Bomb~");

    if let Some(command) = config.command.clone() {
        tokio::spawn(async move {
            if let Err(e) = run_alert_command(&command).await {
                warn!("{}", e);
            }
        });
    }

    if config.bell {
        ring_bell().await?;
    }

    Ok(())
}

async fn ring_bell() -> Result<(), String> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(b"\x07")
        .await
        .map_err(|e| format!("Failed to ring terminal bell: {}", e))?;
    stdout
        .flush()
        .await
        .map_err(|e| format!("Failed to flush terminal bell: {}", e))
}

/// Run the configured alert command and wait for it to exit
pub async fn run_alert_command(command: &str) -> Result<(), String> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| "Alert command is empty".to_string())?;

    debug!("Running alert command: {}", command);

    let output = Command::new(program)
        .args(parts)
        .output()
        .await
        .map_err(|e| format!("Failed to execute alert command {}: {}", program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Alert command {} failed: {}", program, stderr));
    }

    Ok(())
}
