//! Smoke check for a local AnkiConnect installation.
//!
//! Connects to AnkiConnect and reports whether it answers. With `--deck`,
//! also creates the deck and adds one sample card to it.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use ankiapi::{AnkiApi, AnkiClient, Error, Flashcard, Outcome};
use clap::Parser;
use tracing::{debug, info};

/// Check that Anki is running with AnkiConnect and can take new cards.
#[derive(Parser, Debug)]
#[command(name = "ankiapi-smoke")]
#[command(version, about, long_about = None)]
struct Args {
    /// AnkiConnect host address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// AnkiConnect port
    #[arg(long, default_value_t = 8765)]
    port: u16,

    /// AnkiConnect protocol version
    #[arg(long, default_value_t = 6)]
    api_version: u8,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Create this deck and add a sample card to it
    #[arg(long)]
    deck: Option<String>,

    /// Audio file to attach to the sample card
    #[arg(long, requires = "deck")]
    audio: Option<PathBuf>,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let url = format!("http://{}:{}", args.host, args.port);
    info!(anki_url = %url, version = args.api_version, "Connecting to AnkiConnect");

    let client = match AnkiClient::builder()
        .url(&url)
        .version(args.api_version)
        .timeout(Duration::from_secs(args.timeout))
        .connect()
        .await
    {
        Ok(client) => client,
        Err(e @ Error::Connection { .. }) => {
            eprintln!("Failed to connect to Anki: {}", e);
            eprintln!("Make sure Anki is running with the AnkiConnect add-on installed");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("An error occurred: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Successfully connected to Anki at {}", client.url());

    if let Some(deck) = &args.deck {
        if let Err(e) = add_sample(&client, deck, args.audio).await {
            eprintln!("Smoke check failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Create `deck` and add a single sample card to it.
async fn add_sample<A: AnkiApi>(api: &A, deck: &str, audio: Option<PathBuf>) -> ankiapi::Result<()> {
    let created = api.create_deck(deck).await?;
    report_warnings(&created);
    match created.value {
        Some(id) => println!("Deck '{}' ready (id {})", deck, id),
        None => println!("Deck '{}' ready", deck),
    }

    let mut card = Flashcard::new(deck, "ankiapi smoke check", "It works!");
    if let Some(path) = audio {
        card = card.audio(path);
    }
    debug!(?card, "Adding sample card");

    let added = api.add_flashcard(&card).await?;
    report_warnings(&added);
    println!("Added sample note {}", added.value);
    Ok(())
}

fn report_warnings<T>(outcome: &Outcome<T>) {
    for warning in &outcome.warnings {
        println!("Warning: {}", warning);
    }
}
