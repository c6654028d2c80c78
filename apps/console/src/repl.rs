//! # Interactive Prompt Loop
//!
//! Reads command lines, dispatches them, and reports the results.
//!
//! ## Error Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    The Session Is the Boundary                          │
//! │                                                                         │
//! │  bodega> add Milk 0                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dispatch() ──► Err(CommandError)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  error: price must be greater than zero   ◄── printed here only        │
//! │  bodega>                           ◄── and the loop keeps going        │
//! │                                                                         │
//! │  Handlers and the core crate only RETURN errors. This loop is the      │
//! │  single place that prints them. A failed command never ends the        │
//! │  session; only quit/exit, end of input, or a signal does.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Results go to stdout. Logs go to stderr. That split keeps the
//! conversation readable even with `RUST_LOG=debug`.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

use crate::commands::{self, CommandOutput};
use crate::state::AppState;

const PROMPT: &str = "bodega> ";

/// Runs the interactive session on stdin/stdout until quit, EOF,
/// or a shutdown signal.
pub async fn run(mut state: AppState) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = run_session(stdin, stdout, &mut state) => result,
        _ = shutdown_signal() => Ok(()),
    }
}

/// The session loop, generic over its I/O so tests can drive it
/// with in-memory buffers.
pub async fn run_session<R, W>(
    input: R,
    mut output: W,
    state: &mut AppState,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let greeting = format!("{}. Type 'help' for commands.\n", state.config.store_name);
    output.write_all(greeting.as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match commands::dispatch(line, state) {
            Ok(CommandOutput::Text(text)) => {
                output.write_all(text.as_bytes()).await?;
                output.write_all(b"\n").await?;
            }
            Ok(CommandOutput::Exit) => {
                output.write_all(b"Goodbye.\n").await?;
                break;
            }
            Err(err) => {
                let report = format!("error: {}\n", err.message);
                output.write_all(report.as_bytes()).await?;
            }
        }
    }

    output.flush().await?;
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, ending session");
}
