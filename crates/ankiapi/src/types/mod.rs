//! Types for flashcards and operation outcomes.

mod flashcard;
mod outcome;

pub use flashcard::Flashcard;
pub use outcome::{Outcome, Warning};
