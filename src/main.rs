//! Landing page frontend for an ECS-deployed demo service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, loads the Tera templates, sets up the Axum
//! router, and starts the HTTP server with graceful shutdown.

mod config;
mod error;
mod middleware;
mod routes;
mod state;
mod templates;

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use routes::create_router;
use state::AppState;
use templates::init_templates;

/// Landing page frontend for an ECS-deployed demo service
#[derive(Parser, Debug)]
#[command(name = "ecs-landing", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "ecs_landing=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

/// Initialize tracing with the configured filter and output format.
fn init_tracing(filter: &str, format: &str) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolves when SIGTERM or Ctrl+C is received.
///
/// ECS sends SIGTERM when draining a task; in-flight requests are allowed
/// to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before tracing: the formatter choice lives in
    // [logging]. A ConfigError here surfaces through main's Err return on
    // stderr, not through a subscriber.
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging.format);

    tracing::info!("Loaded configuration");

    // Initialize Tera templates
    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Create application state and router
    let state = AppState::new(config.clone(), tera);
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
