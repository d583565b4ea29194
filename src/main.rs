//! Pokedex - A command-line explorer for the PokeAPI creature catalog
//!
//! Runs an interactive prompt over the library crate. Startup sequence:
//! initialize tracing, load configuration, construct the API client
//! (which starts the response cache and its reaper), then loop on stdin
//! until `exit`, EOF, or Ctrl+C, and finally shut the reaper down.

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::commands::{self, Outcome};
use pokedex::error::PokedexError;
use pokedex::{ApiClient, Config, Dex};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "warn" so log lines do not interleave with the prompt;
    // override with RUST_LOG for debugging.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={:?}, base_url={}",
        config.cache_ttl, config.base_url
    );

    // The client owns the cache; no process-wide state.
    let client = ApiClient::new(&config);
    let dex = Dex::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("pokedex> ");
        std::io::stdout().flush().context("flushing prompt")?;

        let line = tokio::select! {
            line = lines.next_line() => line.context("reading stdin")?,
            _ = signal::ctrl_c() => {
                println!();
                break;
            }
        };
        let Some(line) = line else {
            // EOF, e.g. piped input ran out
            break;
        };

        let (command, arg) = match commands::parse_input(&line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(err) => {
                println!("Error: {}", err);
                continue;
            }
        };

        match commands::execute(command, arg, &client, &dex).await {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit) => break,
            Err(err @ PokedexError::UnknownCommand(_)) => println!("{}", err),
            Err(err) => println!("Error! Could not complete command: {}", err),
        }
    }

    // Stop the cache reaper before leaving so the task does not outlive
    // its owner.
    client.shutdown().await;
    info!("Shutdown complete");

    Ok(())
}
