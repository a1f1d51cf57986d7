//! Results of successful operations and the warnings they may carry.

use std::fmt;
use std::path::PathBuf;

/// A recoverable condition hit while performing an operation.
///
/// Warnings never abort an operation. They are logged through `tracing`
/// and returned alongside the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The deck to create was already there.
    DeckExists {
        /// Name of the deck.
        deck: String,
    },

    /// The audio file for a flashcard does not exist.
    AudioNotFound {
        /// Path that was tried.
        path: PathBuf,
    },

    /// The audio file for a flashcard exists but could not be used.
    AudioUnreadable {
        /// Path that was tried.
        path: PathBuf,
        /// Why it could not be read.
        reason: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DeckExists { deck } => write!(f, "deck '{}' already exists", deck),
            Warning::AudioNotFound { path } => {
                write!(f, "audio file not found at: {}", path.display())
            }
            Warning::AudioUnreadable { path, reason } => {
                write!(f, "audio file {} skipped: {}", path.display(), reason)
            }
        }
    }
}

/// The result of an operation that succeeded, possibly with warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    /// The value returned by AnkiConnect.
    pub value: T,
    /// Recoverable conditions hit along the way.
    pub warnings: Vec<Warning>,
}

impl<T> Outcome<T> {
    pub(crate) fn new(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    /// Whether the operation completed without any warning.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Discard the warnings and keep the value.
    pub fn into_value(self) -> T {
        self.value
    }
}
