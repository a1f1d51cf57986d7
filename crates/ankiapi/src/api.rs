//! The capability interface over AnkiConnect.
//!
//! Code that only needs to create decks and cards can be written against
//! [`AnkiApi`] instead of [`AnkiClient`], and be exercised with a mock in
//! tests.

use std::future::Future;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{Flashcard, Outcome};

/// Operations a flashcard backend must provide.
///
/// # Example
///
/// ```no_run
/// use ankiapi::{AnkiApi, AnkiClient, Flashcard};
///
/// async fn add_vocabulary<A: AnkiApi>(api: &A, deck: &str) -> ankiapi::Result<i64> {
///     api.create_deck(deck).await?;
///     let card = Flashcard::new(deck, "hola", "hello");
///     Ok(api.add_flashcard(&card).await?.value)
/// }
///
/// # async fn example() -> ankiapi::Result<()> {
/// let client = AnkiClient::connect().await?;
/// add_vocabulary(&client, "Spanish").await?;
/// # Ok(())
/// # }
/// ```
pub trait AnkiApi {
    /// Verify the backend answers.
    fn check_reachability(&self) -> impl Future<Output = Result<()>> + Send;

    /// Create a deck, treating an existing deck as a warning.
    fn create_deck(
        &self,
        deck: &str,
    ) -> impl Future<Output = Result<Outcome<Option<i64>>>> + Send;

    /// Add a flashcard and return the new note ID.
    fn add_flashcard(
        &self,
        card: &Flashcard,
    ) -> impl Future<Output = Result<Outcome<i64>>> + Send;
}

impl AnkiApi for AnkiClient {
    fn check_reachability(&self) -> impl Future<Output = Result<()>> + Send {
        AnkiClient::check_reachability(self)
    }

    fn create_deck(
        &self,
        deck: &str,
    ) -> impl Future<Output = Result<Outcome<Option<i64>>>> + Send {
        AnkiClient::create_deck(self, deck)
    }

    fn add_flashcard(
        &self,
        card: &Flashcard,
    ) -> impl Future<Output = Result<Outcome<i64>>> + Send {
        AnkiClient::add_flashcard(self, card)
    }
}
