//! Example: Creating a deck and adding flashcards.
//!
//! This example demonstrates:
//! - Connecting to AnkiConnect and handling a missing Anki
//! - Creating a deck (twice, to show the warning)
//! - Adding text-only and audio flashcards
//!
//! Run with: cargo run --example add_flashcards [path/to/audio.mp3]

use ankiapi::{AnkiClient, Error, Flashcard};

#[tokio::main]
async fn main() -> ankiapi::Result<()> {
    let client = match AnkiClient::connect().await {
        Ok(client) => client,
        Err(e @ Error::Connection { .. }) => {
            eprintln!("{}", e);
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    let test_deck = "Example Deck";

    // ========== DECK ==========
    println!("--- Creating deck ---");

    let outcome = client.create_deck(test_deck).await?;
    println!("Created deck: {:?}", outcome.value);

    let outcome = client.create_deck(test_deck).await?;
    for warning in &outcome.warnings {
        println!("Second create warned: {}", warning);
    }

    // ========== TEXT CARD ==========
    println!("\n--- Adding a text flashcard ---");

    let card = Flashcard::new(test_deck, "What is the capital of France?", "Paris");
    match client.add_flashcard(&card).await {
        Ok(outcome) => println!("Created note with ID: {}", outcome.value),
        Err(e) => println!("Note creation failed (might be duplicate): {}", e),
    }

    // ========== AUDIO CARD ==========
    println!("\n--- Adding a flashcard with audio ---");

    let audio = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "bonjour.mp3".to_string());
    let card = Flashcard::new(test_deck, "How do you say hello in French?", "Bonjour").audio(audio);
    match client.add_flashcard(&card).await {
        Ok(outcome) => {
            println!("Created note with ID: {}", outcome.value);
            for warning in &outcome.warnings {
                println!("  warning: {}", warning);
            }
        }
        Err(e) => println!("Note creation failed: {}", e),
    }

    Ok(())
}
