//! Tests for code written against the `AnkiApi` capability trait.

mod common;

use std::sync::Mutex;

use ankiapi::{AnkiApi, Error, Flashcard, Outcome, Result, Warning};
use common::{connected_client, mock_action, mock_anki_response, setup_mock_server};

/// In-memory stand-in for AnkiConnect.
#[derive(Default)]
struct MockAnki {
    decks: Mutex<Vec<String>>,
    cards: Mutex<Vec<Flashcard>>,
}

impl AnkiApi for MockAnki {
    async fn check_reachability(&self) -> Result<()> {
        Ok(())
    }

    async fn create_deck(&self, deck: &str) -> Result<Outcome<Option<i64>>> {
        let mut decks = self.decks.lock().unwrap();
        if decks.iter().any(|d| d == deck) {
            let warning = Warning::DeckExists {
                deck: deck.to_string(),
            };
            return Ok(Outcome {
                value: None,
                warnings: vec![warning],
            });
        }
        decks.push(deck.to_string());
        Ok(Outcome {
            value: Some(decks.len() as i64),
            warnings: Vec::new(),
        })
    }

    async fn add_flashcard(&self, card: &Flashcard) -> Result<Outcome<i64>> {
        if !self.decks.lock().unwrap().contains(&card.deck) {
            return Err(Error::Remote("deck was not found".to_string()));
        }
        let mut cards = self.cards.lock().unwrap();
        cards.push(card.clone());
        Ok(Outcome {
            value: cards.len() as i64,
            warnings: Vec::new(),
        })
    }
}

/// Create a deck and fill it with cards, returning the note IDs.
async fn add_vocabulary<A: AnkiApi>(api: &A, deck: &str, words: &[(&str, &str)]) -> Result<Vec<i64>> {
    api.check_reachability().await?;
    api.create_deck(deck).await?;
    let mut ids = Vec::new();
    for (front, back) in words {
        let outcome = api.add_flashcard(&Flashcard::new(deck, *front, *back)).await?;
        ids.push(outcome.value);
    }
    Ok(ids)
}

#[tokio::test]
async fn test_mock_backend() {
    let mock = MockAnki::default();

    let ids = add_vocabulary(&mock, "Spanish", &[("hola", "hello"), ("adiós", "bye")])
        .await
        .unwrap();

    assert_eq!(ids, vec![1, 2]);
    assert_eq!(mock.cards.lock().unwrap()[1].front, "adiós");
}

#[tokio::test]
async fn test_mock_backend_duplicate_deck_warns() {
    let mock = MockAnki::default();
    mock.create_deck("Spanish").await.unwrap();

    let outcome = mock.create_deck("Spanish").await.unwrap();

    assert!(!outcome.is_clean());
}

#[tokio::test]
async fn test_mock_backend_unknown_deck() {
    let mock = MockAnki::default();

    let result = mock.add_flashcard(&Flashcard::new("Nope", "a", "b")).await;

    assert!(matches!(result, Err(Error::Remote(_))));
}

#[tokio::test]
async fn test_client_through_trait() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;
    // connected_client already pinged once; the trait pings again.
    server.reset().await;
    mock_action(&server, "ping", mock_anki_response(serde_json::Value::Null)).await;
    mock_action(&server, "createDeck", mock_anki_response(10_i64)).await;
    mock_action(&server, "addNote", mock_anki_response(11_i64)).await;

    let ids = add_vocabulary(&client, "Spanish", &[("hola", "hello")])
        .await
        .unwrap();

    assert_eq!(ids, vec![11]);
}
