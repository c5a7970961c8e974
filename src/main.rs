//! Hydrate - A local hydration reminder server
//! 
//! This is the main entry point for the hydrate application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use hydrate::{
    config::Config,
    state::AppState,
    api::create_router,
    services::{CommandAudioPlayer, DesktopNotifier, NotificationPort, Ports, ToastBoard},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("hydrate={},tower_http=info", config.log_level()))
        .init();

    info!("Starting hydrate server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, interval={}min",
          config.host, config.port, config.interval);

    let notifier = Arc::new(DesktopNotifier::new(config.notifier.clone(), !config.no_notifications));
    let ports = Ports {
        notifier: notifier.clone(),
        audio: Arc::new(CommandAudioPlayer::new(config.player.clone())),
        toasts: Arc::new(ToastBoard::new(config.toast_ttl)),
    };

    if config.sound.is_none() {
        warn!("No sound file configured, reminders will be silent");
    }

    // Ask once at startup; the page can ask again later
    notifier.request_permission().await;

    // Create application state
    let state = Arc::new(
        AppState::new(config.port, config.host.clone(), config.interval, ports)
            .with_sound_asset(config.sound.clone()),
    );

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /                          - Reminder widget");
    info!("  POST /timer/toggle              - Start or pause the countdown");
    info!("  POST /timer/reset               - Reset the countdown");
    info!("  PUT  /interval                  - Set the interval");
    info!("  POST /interval/increase         - Interval +5min");
    info!("  POST /interval/decrease         - Interval -5min");
    info!("  POST /water                     - Add water");
    info!("  PUT  /water/custom              - Set the custom amount");
    info!("  POST /notifications/permission  - Request notification permission");
    info!("  POST /sound/test                - Play the reminder sound");
    info!("  GET  /status                    - Current state");
    info!("  GET  /events                    - State stream (SSE)");
    info!("  GET  /health                    - Health check");

    // Setup graceful shutdown
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

    state.shutdown();
    info!("Server shutdown complete");
    Ok(())
}
