//! SurgiAlgo Proxy - signed forwarding to Delta Exchange India
//!
//! Serves the liveness and connect endpoints over HTTP.

use surgialgo_proxy::{app::build_router, settings::Settings, telemetry};
use tokio::signal;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

fn exit_with(message: String) -> ! {
    tracing::error!("{message}");
    telemetry::shutdown_tracing();
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    let settings = Settings::from_env();
    if let Err(err) = settings.validate() {
        exit_with(format!("Invalid configuration: {err}"));
    }

    let app = match build_router(&settings) {
        Ok(app) => app,
        Err(err) => exit_with(format!("Failed to build router: {err}")),
    };

    let addr = settings.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => exit_with(format!("Failed to bind {addr}: {err}")),
    };

    tracing::info!(
        mode = %settings.mode(),
        upstream = settings.upstream_base_url(),
        "SurgiAlgo proxy running on {addr}"
    );

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {err}");
    }

    telemetry::shutdown_tracing();
}
