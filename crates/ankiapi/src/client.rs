//! The AnkiConnect client and builder.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::media::{self, AudioAttachment};
use crate::request::{Envelope, Reply};
use crate::types::{Flashcard, Outcome, Warning};

/// Default URL for AnkiConnect.
const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// Protocol version understood by current AnkiConnect releases.
const DEFAULT_VERSION: u8 = 6;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error string AnkiConnect reports when the deck is already there.
const DECK_EXISTS: &str = "Deck already exists";

/// Note type every flashcard is created with.
const BASIC_MODEL: &str = "Basic";

/// Separates the back text from the sound tag AnkiConnect appends.
const AUDIO_SEPARATOR: &str = "<br>";

// Parameter structs for actions
#[derive(Serialize)]
struct CreateDeckParams<'a> {
    deck: &'a str,
}

#[derive(Serialize)]
struct AddNoteParams<'a> {
    note: NotePayload<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotePayload<'a> {
    deck_name: &'a str,
    model_name: &'a str,
    fields: BasicFields<'a>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    audio: Vec<AudioAttachment>,
}

#[derive(Serialize)]
struct BasicFields<'a> {
    #[serde(rename = "Front")]
    front: &'a str,
    #[serde(rename = "Back")]
    back: String,
}

/// The client for creating decks and flashcards through AnkiConnect.
///
/// A client only exists once AnkiConnect has answered a health check, so
/// construction is async and fallible. Its configuration never changes
/// afterwards; clones share the same HTTP connection pool.
///
/// # Example
///
/// ```no_run
/// use ankiapi::{AnkiClient, Flashcard};
///
/// # async fn example() -> ankiapi::Result<()> {
/// // Connect with default settings
/// let client = AnkiClient::connect().await?;
///
/// client.create_deck("Spanish").await?;
/// let card = Flashcard::new("Spanish", "hola", "hello");
/// let outcome = client.add_flashcard(&card).await?;
/// println!("Created note {}", outcome.value);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http_client: Client,
    url: String,
    version: u8,
}

impl AnkiClient {
    /// Connect with default settings.
    ///
    /// Targets `http://127.0.0.1:8765` using protocol version 6 and a
    /// 30 second timeout. Fails with [`Error::Connection`] if AnkiConnect
    /// does not answer.
    pub async fn connect() -> Result<Self> {
        Self::builder().connect().await
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The protocol version stamped on every request.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Check that AnkiConnect answers at the configured URL.
    ///
    /// Sends a `ping` action without parameters. Any transport failure or
    /// non-2xx status is reported as [`Error::Connection`]; the body of a
    /// successful response is not inspected.
    pub async fn check_reachability(&self) -> Result<()> {
        let envelope = Envelope::<()>::without_params("ping", self.version);
        debug!(url = %self.url, "Pinging AnkiConnect");

        let response = self
            .http_client
            .post(&self.url)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| self.unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.unreachable(format!("HTTP {}", status)));
        }

        info!(url = %self.url, "AnkiConnect is running");
        Ok(())
    }

    /// Create a new deck.
    ///
    /// Returns the new deck's ID when AnkiConnect reports one. If the deck
    /// already exists the call still succeeds, with no ID and a
    /// [`Warning::DeckExists`] on the outcome.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] for an empty name; nothing is sent.
    /// - [`Error::Transport`] when AnkiConnect answers with a non-2xx status.
    /// - [`Error::Remote`] for any other error reported by AnkiConnect.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankiapi::AnkiClient;
    /// # async fn example() -> ankiapi::Result<()> {
    /// let client = AnkiClient::connect().await?;
    /// let outcome = client.create_deck("My New Deck").await?;
    /// if let Some(id) = outcome.value {
    ///     println!("Created deck {}", id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_deck(&self, deck: &str) -> Result<Outcome<Option<i64>>> {
        if deck.trim().is_empty() {
            return Err(Error::InvalidInput("deck name must not be empty".to_string()));
        }

        let reply: Reply<i64> = self
            .invoke("createDeck", CreateDeckParams { deck })
            .await?;

        match reply.error {
            Some(err) if err == DECK_EXISTS => {
                let warning = Warning::DeckExists {
                    deck: deck.to_string(),
                };
                warn!(deck, "{}", warning);
                Ok(Outcome::new(None, vec![warning]))
            }
            Some(err) => Err(Error::Remote(err)),
            None => Ok(Outcome::new(reply.result, Vec::new())),
        }
    }

    /// Add a flashcard using the "Basic" note type.
    ///
    /// Returns the ID of the created note.
    ///
    /// # Audio
    ///
    /// When the card has an audio path, the file is sent along with the
    /// note. AnkiConnect stores it in the media folder and appends
    /// `[sound:<stored name>]` to the back, after a `<br>`. A missing or
    /// unreadable file does not fail the call: the card is created with its
    /// text unchanged and the outcome carries a warning.
    ///
    /// The deck is not checked beforehand; AnkiConnect rejects unknown
    /// decks with [`Error::Remote`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ankiapi::{AnkiClient, Flashcard};
    ///
    /// # async fn example() -> ankiapi::Result<()> {
    /// let client = AnkiClient::connect().await?;
    /// let card = Flashcard::new("Japanese", "猫", "cat").audio("audio/neko.mp3");
    /// let outcome = client.add_flashcard(&card).await?;
    /// for warning in &outcome.warnings {
    ///     eprintln!("warning: {}", warning);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_flashcard(&self, card: &Flashcard) -> Result<Outcome<i64>> {
        let mut warnings = Vec::new();
        let mut back = card.back.clone();
        let mut audio = Vec::new();

        if let Some(path) = card.audio.as_deref() {
            match media::load_audio(path).await {
                Ok(attachment) => {
                    back.push_str(AUDIO_SEPARATOR);
                    audio.push(attachment);
                }
                Err(warning) => {
                    warn!(deck = %card.deck, "{}", warning);
                    warnings.push(warning);
                }
            }
        }

        let params = AddNoteParams {
            note: NotePayload {
                deck_name: &card.deck,
                model_name: BASIC_MODEL,
                fields: BasicFields {
                    front: &card.front,
                    back,
                },
                audio,
            },
        };

        let reply: Reply<i64> = self.invoke("addNote", params).await?;
        let note_id = reply.into_result()?;
        Ok(Outcome::new(note_id, warnings))
    }

    /// Execute an action with parameters and decode the reply envelope.
    ///
    /// The `error` field is left for the caller to interpret.
    pub(crate) async fn invoke<P, R>(&self, action: &str, params: P) -> Result<Reply<R>>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let envelope = Envelope::new(action, self.version, params);
        debug!(action, url = %self.url, "Sending AnkiConnect request");

        let response = self
            .http_client
            .post(&self.url)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    self.unreachable(e.to_string())
                } else {
                    Error::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport {
                action: action.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(Error::Http)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn unreachable(&self, reason: String) -> Error {
        Error::Connection {
            url: self.url.clone(),
            reason,
        }
    }
}

/// Builder for connecting a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ankiapi::AnkiClient;
///
/// # async fn example() -> ankiapi::Result<()> {
/// let client = AnkiClient::builder()
///     .url("http://localhost:8765")
///     .version(6)
///     .timeout(Duration::from_secs(60))
///     .connect()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    url: String,
    version: u8,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            version: DEFAULT_VERSION,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the AnkiConnect URL.
    ///
    /// Defaults to `http://127.0.0.1:8765`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the protocol version sent with every request.
    ///
    /// Defaults to 6.
    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client and verify that AnkiConnect is reachable.
    pub async fn connect(self) -> Result<AnkiClient> {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        let client = AnkiClient {
            http_client,
            url: self.url,
            version: self.version,
        };
        client.check_reachability().await?;
        Ok(client)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
