//! Error types for the ankiapi crate.
//!
//! Hard failures are reported through [`Error`]. Conditions the client can
//! recover from on its own (an existing deck, a missing audio file) are not
//! errors; they come back as [`Warning`](crate::Warning)s on a successful
//! [`Outcome`](crate::Outcome).
//!
//! # Example
//!
//! ```no_run
//! use ankiapi::{AnkiClient, Error};
//!
//! # async fn example() {
//! match AnkiClient::connect().await {
//!     Ok(client) => println!("Connected to {}", client.url()),
//!     Err(e @ Error::Connection { .. }) => {
//!         eprintln!("{}", e);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// The error type for AnkiConnect operations.
///
/// # Handling Remote Errors
///
/// ```no_run
/// use ankiapi::{AnkiClient, Error, Flashcard};
///
/// # async fn example() -> ankiapi::Result<()> {
/// let client = AnkiClient::connect().await?;
/// let card = Flashcard::new("Spanish", "hola", "hello");
///
/// match client.add_flashcard(&card).await {
///     Ok(outcome) => println!("Created note {}", outcome.value),
///     Err(Error::Remote(msg)) if msg.contains("duplicate") => {
///         println!("Card already exists");
///     }
///     Err(e) => return Err(e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// AnkiConnect could not be reached.
    ///
    /// Returned when construction fails its health check, and when a later
    /// request cannot open a connection. Usually means Anki is not running
    /// or the AnkiConnect add-on is not installed.
    #[error(
        "Can't connect to Anki at {url}. Maybe Anki is not running or the AnkiConnect add-on is not installed? ({reason})"
    )]
    Connection {
        /// The endpoint that was tried.
        url: String,
        /// What went wrong at the transport level.
        reason: String,
    },

    /// A request reached AnkiConnect but came back with a non-2xx status.
    #[error("AnkiConnect returned HTTP {status} for action `{action}`")]
    Transport {
        /// The action that was sent.
        action: String,
        /// The HTTP status received.
        status: StatusCode,
    },

    /// HTTP/network error from reqwest that is not a refused connection.
    ///
    /// Timeouts end up here.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// AnkiConnect reported a failure in the `error` field.
    ///
    /// The message is the envelope's `error` string, unmodified. Common
    /// messages include:
    /// - "cannot create note because it is a duplicate"
    /// - "deck was not found"
    /// - "model was not found"
    #[error("{0}")]
    Remote(String),

    /// Response carried neither a result nor an error.
    #[error("AnkiConnect returned empty response")]
    EmptyResponse,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An argument was rejected before anything was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error means AnkiConnect could not be reached.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
