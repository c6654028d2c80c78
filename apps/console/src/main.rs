//! # Bodega Console
//!
//! Interactive inventory console for a single store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bodega Console                                   │
//! │                                                                         │
//! │  stdin ───► prompt loop ───► commands ───► bodega-core                 │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │              stdout (results and error messages)                        │
//! │              stderr (tracing logs, RUST_LOG controlled)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;
mod error;
mod repl;
mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Bodega console v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::from_env()?;
    info!(store = %config.store_name, "Configuration loaded");

    // Run the interactive session until quit, EOF, or a signal
    let state = AppState::new(config);
    repl::run(state).await?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels (via RUST_LOG)
/// - `RUST_LOG=debug` - Show per-command debug messages
/// - `RUST_LOG=bodega=trace` - Show trace for bodega crates only
/// - Default: INFO level
///
/// Logs go to stderr so they never interleave with prompt output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
