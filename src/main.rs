//! Countdown Timer - A minute/second countdown with pause, resume and alert
//! 
//! This is the main entry point for the countdown-timer application.

use tokio::net::TcpListener;
use tracing::info;

use countdown_timer::{
    config::Config,
    state::CountdownController,
    api::create_router,
    tasks::{completion_alert_task, display_log_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, grace={}ms, bell={}",
          config.host, config.port, config.grace_ms, !config.no_bell);

    let controller = CountdownController::new();

    // Alert on completion and return to the input form after the grace period
    tokio::spawn(completion_alert_task(
        controller.clone(),
        config.alert_config(),
        config.grace_period(),
    ));
    tokio::spawn(display_log_task(controller.subscribe_display()));

    let app = create_router(controller.clone());

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /minutes  - Edit minutes field {{\"text\": \"..\"}}");
    info!("  POST /seconds  - Edit seconds field {{\"text\": \"..\"}}");
    info!("  POST /start    - Start the countdown");
    info!("  POST /pause    - Pause or resume");
    info!("  POST /stop     - Stop and reset");
    info!("  GET  /status   - Current display and timer state");
    info!("  GET  /health   - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    controller.dispose();
    info!("Server shutdown complete");
    Ok(())
}
