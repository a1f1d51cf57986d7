//! Audio attachments for flashcards.
//!
//! Audio travels inside the `addNote` request as an AnkiConnect media
//! attachment. The bytes are base64-encoded and AnkiConnect stores them in
//! the collection's media folder, then appends `[sound:<stored name>]` to
//! every field listed in the attachment. Only `Back` is listed.
//!
//! Stored names carry a short content hash (`clip-1a2b3c4d.mp3`), so two
//! different files sharing a basename do not overwrite each other, while the
//! same file added twice maps to the same media entry.

use std::io::ErrorKind;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::types::Warning;

/// Field the sound tag is written into.
const AUDIO_FIELD: &str = "Back";

/// Hex digits of the content hash kept in stored names.
const HASH_LEN: usize = 8;

/// A media file shipped with an `addNote` request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AudioAttachment {
    /// Name the file is stored under in the media folder.
    pub filename: String,
    /// Base64-encoded file contents.
    pub data: String,
    /// Fields AnkiConnect appends the sound tag to.
    pub fields: Vec<String>,
}

/// Read an audio file into an attachment.
///
/// Failures come back as the [`Warning`] to report; the caller goes on
/// without audio.
pub(crate) async fn load_audio(path: &Path) -> Result<AudioAttachment, Warning> {
    let Some(stem) = path.file_stem() else {
        return Err(Warning::AudioUnreadable {
            path: path.to_path_buf(),
            reason: "path has no file name".to_string(),
        });
    };

    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => Warning::AudioNotFound {
            path: path.to_path_buf(),
        },
        _ => Warning::AudioUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let digest = hex::encode(Sha256::digest(&bytes));
    let hash = &digest[..HASH_LEN];
    let filename = match path.extension() {
        Some(ext) => format!(
            "{}-{}.{}",
            stem.to_string_lossy(),
            hash,
            ext.to_string_lossy()
        ),
        None => format!("{}-{}", stem.to_string_lossy(), hash),
    };

    Ok(AudioAttachment {
        filename,
        data: STANDARD.encode(&bytes),
        fields: vec![AUDIO_FIELD.to_string()],
    })
}
