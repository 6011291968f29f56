//! Ollama bridge server.
//!
//! Serves the portfolio front-end from a directory and relays its questions
//! to a locally running Ollama model.

use clap::Parser;
use ollama_bridge_core::init_tracing;
use ollama_bridge_ollama::DEFAULT_OLLAMA_URL;
use ollama_bridge_server::{BridgeConfig, BridgeState, DEFAULT_HOST, DEFAULT_PORT, create_router};
use std::path::PathBuf;
use tracing::{info, warn};

/// Command-line arguments for the bridge server.
#[derive(Parser, Debug)]
#[command(name = "ollama-bridge")]
#[command(about = "Relay prompts from a web front-end to a local Ollama model")]
#[command(version)]
struct Args {
    /// Ollama generate endpoint
    #[arg(long, env = "OLLAMA_URL", default_value = DEFAULT_OLLAMA_URL)]
    ollama_url: String,

    /// Interface to listen on
    #[arg(long, env = "BRIDGE_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "BRIDGE_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory served for non-API paths
    #[arg(long, env = "BRIDGE_STATIC_DIR", default_value = ".")]
    static_dir: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, env = "BRIDGE_LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json)?;

    let config = BridgeConfig::builder()
        .ollama_url(args.ollama_url)
        .host(args.host)
        .port(args.port)
        .static_dir(args.static_dir)
        .build()?;

    if !config.static_dir().is_dir() {
        warn!(static_dir = ?config.static_dir(), "Static directory does not exist");
    }

    let addr = config.bind_addr();
    info!(
        ollama_url = %config.ollama_url(),
        static_dir = ?config.static_dir(),
        addr = %addr,
        "Starting Ollama bridge"
    );

    let state = BridgeState::new(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");
    info!("  POST /api/ollama - Relay a prompt or chat messages to Ollama");
    info!("  GET  /health     - Liveness probe");
    info!("  GET  /*          - Static files");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Ollama bridge stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
