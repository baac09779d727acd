//! Application entry point and server initialization
//!
//! This module contains the main function that:
//! - Loads environment configuration
//! - Loads the movie seed into memory
//! - Starts the HTTP server with graceful shutdown support

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use movies_api::config::Config;
use movies_api::route::create_app;
use movies_api::store::{AppState, MovieStore};

/// Application entry point
///
/// # Environment Variables
///
/// - `PORT` - Server port number (default: 1234)
/// - `MOVIES_FILE` - Path to a JSON seed file (default: bundled seed)
/// - `RUST_LOG` - Log filter (default: "movies_api=debug,tower_http=debug")
#[tokio::main]
async fn main() {
    // Load environment variables from .env file if it exists
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();

    let store = match MovieStore::load(config.movies_file.as_deref()) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Failed to load movies");
            std::process::exit(1);
        }
    };

    let app = create_app(AppState::new(store));

    // Bind to all network interfaces on the specified port
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %addr, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!("Server listening on http://localhost:{}", config.port);

    // The server will continue running until it receives SIGTERM or SIGINT
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Resolves when SIGINT (Ctrl+C) or, on Unix, SIGTERM is received
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    // On non-Unix systems (Windows), only handle Ctrl+C
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server");
}
