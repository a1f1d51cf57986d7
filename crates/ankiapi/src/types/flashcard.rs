//! Flashcard types.

use std::path::PathBuf;

/// A front/back flashcard to be added to a deck.
///
/// Cards are created with the built-in "Basic" note type, so `front` and
/// `back` map onto its `Front` and `Back` fields.
///
/// # Field Values
///
/// Field values are HTML. If you need literal `<` or `>`, use `&lt;` and `&gt;`.
///
/// # Example
///
/// ```
/// use ankiapi::Flashcard;
///
/// let card = Flashcard::new("Spanish", "<b>perro</b>", "dog")
///     .audio("/tmp/perro.mp3");
/// assert_eq!(card.deck, "Spanish");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    /// The deck to add the card to.
    pub deck: String,
    /// Content of the front side.
    pub front: String,
    /// Content of the back side.
    pub back: String,
    /// Local audio file to attach to the back side.
    pub audio: Option<PathBuf>,
}

impl Flashcard {
    /// Create a text-only flashcard.
    pub fn new(
        deck: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        Self {
            deck: deck.into(),
            front: front.into(),
            back: back.into(),
            audio: None,
        }
    }

    /// Attach an audio file to the back side.
    ///
    /// The file is read when the card is added. If it cannot be read the
    /// card is still created, without audio.
    ///
    /// In Anki's media folder the file is stored as `<stem>-<hash>.<ext>`,
    /// where `<hash>` is the first 8 hex digits of the SHA-256 of its
    /// contents. Clips sharing a basename therefore never replace each
    /// other.
    pub fn audio(mut self, path: impl Into<PathBuf>) -> Self {
        self.audio = Some(path.into());
        self
    }
}
