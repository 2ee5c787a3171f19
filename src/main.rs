//! Contact Book - Main entry point
//!
//! Loads the contact file, then reads commands from stdin until `quit` or end
//! of input. Logs go to stderr so they never mix with the shell output.

use anyhow::{Context, Result};
use contact_book::repositories::{ContactStore, JsonFileStore};
use contact_book::services::{EditSession, SessionEvent, SessionOptions};
use contact_book::shell::{self, Command, Flow};
use contact_book::Config;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "contacts> ";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let store = match &config.contacts_file {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::at_default_location().map_err(|e| {
            error!("Failed to locate contact file: {}", e);
            e
        })?,
    };
    info!("Using contact file {}", store.path().display());

    let metrics = store.metrics().clone();
    let store = Arc::new(store) as Arc<dyn ContactStore>;

    let mut session = EditSession::load(store, SessionOptions::from(&config)).await;
    let watcher = tokio::spawn(log_events(session.subscribe()));

    let mut stdout = tokio::io::stdout();
    if let Some(notice) = session.take_load_notice() {
        stdout.write_all(format!("{}\n", notice).as_bytes()).await?;
    }
    stdout
        .write_all(format!("{}\n", shell::render_list(&session)).as_bytes())
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let output = match line.parse::<Command>() {
            Ok(command) => match shell::execute(&mut session, command).await {
                Flow::Continue(output) => output,
                Flow::Quit => break,
            },
            Err(contact_book::CommandError::Empty) => continue,
            Err(e) => format!("Error: {}", e),
        };

        stdout.write_all(format!("{}\n", output).as_bytes()).await?;
    }

    drop(session);
    if let Err(e) = watcher.await {
        warn!("Event logger ended abnormally: {}", e);
    }

    metrics.log_summary();
    info!("Contact Book shutdown complete");
    Ok(())
}

/// Trace every session change until the session is dropped.
async fn log_events(mut events: broadcast::Receiver<SessionEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => debug!(?event, "Session changed"),
            Err(RecvError::Lagged(skipped)) => {
                debug!(skipped = skipped, "Event logger lagged behind")
            }
            Err(RecvError::Closed) => break,
        }
    }
}
