//! Lacag Server
//!
//! Serves the mobile-money wallet routing configuration to the payment form
//! and the admin dashboard.

mod api;
mod cli;
mod config;
mod server;
mod shutdown;
mod state;

use clap::Parser;
use cli::Command;
use config::{ConfigLoader, build_storage};
use lacag_core::routing::WalletRoutingStore;
use server::{build_router, run_server, spawn_change_logger};
use shutdown::spawn_config_reload_handler;
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Lacag - mobile-money wallet routing service
#[derive(Parser, Debug)]
#[command(name = "lacag-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env = "LACAG_CONFIG", default_value = "./lacag-config.toml")]
    config: PathBuf,

    /// Override the listen address (e.g., 0.0.0.0:3000)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!("Starting lacag-server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_loader = Arc::new(ConfigLoader::new(&args.config, args.listen));
    let loaded_config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::info!("Configuration loaded from {:?}", args.config);

    // The one store instance for this process
    let storage_config = loaded_config.storage.clone();
    let store = WalletRoutingStore::load_with_key(
        build_storage(&storage_config),
        storage_config.key.clone(),
    );

    let command = args.command.unwrap_or(Command::Serve);
    if !matches!(command, Command::Serve) {
        let mut stdout = std::io::stdout().lock();
        return cli::run(command, &store, &loaded_config.resolver, &mut stdout);
    }

    let listen_addr = loaded_config.server.listen;

    // Convert to shared config with separate locks for each section
    let shared_config = loaded_config.into_shared();

    // Create application state
    let state = AppState::new(store.clone(), shared_config);

    let change_logger = spawn_change_logger(store);

    // Spawn config reload handler (listens for SIGHUP)
    let shutdown_notify =
        spawn_config_reload_handler(state.clone(), config_loader, storage_config);

    // Build the router
    let router = build_router(state);

    // Run the server
    tracing::info!("Starting HTTP server on {}", listen_addr);
    let result = run_server(router, listen_addr).await;

    // Signal the config reload handler to stop
    shutdown_notify.notify_one();
    change_logger.abort();
    tracing::info!("Server shutdown complete");

    result.map_err(Into::into)
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so that command output on stdout stays machine-readable.
/// `LACAG_LOG_FORMAT=json` switches to one JSON object per line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LACAG_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}
