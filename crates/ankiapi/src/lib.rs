//! A small async client for creating Anki decks and flashcards through the
//! AnkiConnect API.
//!
//! # Quick Start
//!
//! ```no_run
//! use ankiapi::{AnkiClient, Flashcard};
//!
//! # async fn example() -> ankiapi::Result<()> {
//! // Connects to localhost:8765 and checks that AnkiConnect answers
//! let client = AnkiClient::connect().await?;
//!
//! client.create_deck("Spanish").await?;
//!
//! let card = Flashcard::new("Spanish", "el perro", "the dog").audio("perro.mp3");
//! let outcome = client.add_flashcard(&card).await?;
//! println!("Created note {}", outcome.value);
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use ankiapi::AnkiClient;
//!
//! # async fn example() -> ankiapi::Result<()> {
//! let client = AnkiClient::builder()
//!     .url("http://localhost:8765")
//!     .version(6)
//!     .timeout(Duration::from_secs(60))
//!     .connect()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Warnings
//!
//! Creating a deck that already exists, or attaching an audio file that
//! cannot be read, does not fail the call. The returned [`Outcome`] lists
//! these as [`Warning`]s, and they are also logged with `tracing`.
//!
//! # Requirements
//!
//! - Anki must be running with the [AnkiConnect](https://ankiweb.net/shared/info/2055492159) add-on installed
//! - By default, the client connects to `http://127.0.0.1:8765`

pub mod api;
pub mod client;
pub mod error;
mod media;
mod request;
pub mod types;

pub use api::AnkiApi;
pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use types::{Flashcard, Outcome, Warning};
