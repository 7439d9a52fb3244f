// langbridge - HTTP gateway to pretrained OPUS-MT translation models

use anyhow::Result;
use clap::Parser;
use langbridge::access::AllowedOrigins;
use langbridge::cli::Args;
use langbridge::config::AppConfig;
use langbridge::server::create_router;
use langbridge::translation::build_registry;
use langbridge::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration, CLI flags win
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting langbridge v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build translation adapters
    let registry = build_registry(&config.models)?;
    info!(
        "Serving {} direction(s): {}",
        registry.len(),
        registry.directions().join(", ")
    );

    // Phase 4: Compute allowed origins
    let origins = if config.access.enabled {
        Some(AllowedOrigins::from_config(&config.access)?)
    } else {
        None
    };

    // Phase 5: Build and start HTTP server
    let app = create_router(registry, origins);
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
