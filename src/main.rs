use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_dash::common::AppState;
use weather_dash::config::Config;
use weather_dash::dashboard::CycleOutcome;
use weather_dash::licor::LicorClient;
use weather_dash::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,weather_dash=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting weather-dash...");

    // Load configuration (fail-fast)
    let config = Config::from_env()?;
    tracing::info!(
        deployment = ?config.deployment,
        host = %config.api_host,
        port = config.api_port,
        device = %config.default_device,
        preset = %config.default_window_preset,
        "Configuration loaded"
    );

    let licor_client = LicorClient::new(&config)?;
    tracing::info!(base_url = %config.licor_base_url, "LI-COR client initialized");

    let state = AppState::new(config.clone(), licor_client);

    // Initial load runs in the background; the server is usable while it is in flight
    let initial = state.clone();
    tokio::spawn(async move {
        if let CycleOutcome::Failed(e) = initial.refresh().await {
            tracing::warn!(error = %e, "Initial load failed");
        }
    });

    let app = routes::build_router(state.clone());

    // Start server with graceful shutdown
    let addr = config.bind_address();
    tracing::info!(address = %addr, "Starting server");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release every chart before exit
    state.dashboard.lock().await.unmount();

    tracing::info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        },
    }
}
