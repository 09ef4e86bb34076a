//! Narration for Claimsight predictions.
//!
//! The [`Narrator`] trait is the port; [`TranslateTts`] is the concrete
//! adapter that asks the public Google Translate TTS endpoint to synthesize
//! the prediction sentence and persists the MP3 under the configured output
//! directory. Narration is a one-shot side effect: no retries, not
//! idempotent, skipped entirely when prediction fails.

mod translate;

use std::path::PathBuf;

pub use translate::TranslateTts;

/// Speech subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech synthesis request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("audio write failed: {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Speech synthesis port.
///
/// Implementations synthesize `text`, persist the audio, and return the
/// path the caller can offer for playback.
pub trait Narrator: Send + Sync {
    /// Synthesize and persist narration audio.
    ///
    /// # Errors
    /// Returns [`SpeechError`] if synthesis or the audio write fails.
    fn narrate(&self, text: &str) -> Result<PathBuf, SpeechError>;
}

/// Build the narration sentence for a formatted prediction.
pub fn narration_text(formatted_amount: &str) -> String {
    format!("The predicted insurance claim amount is {formatted_amount}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_sentence_embeds_the_amount() {
        assert_eq!(
            narration_text("₹12,345.68"),
            "The predicted insurance claim amount is ₹12,345.68."
        );
    }
}
