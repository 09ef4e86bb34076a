//! Google Translate TTS adapter.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Utc;

use claimsight_core::SpeechConfig;

use crate::{Narrator, SpeechError};

const ENDPOINT: &str = "https://translate.google.com/translate_tts";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// In-process sequence number appended to audio file names. Timestamps alone
/// can collide within a millisecond.
static AUDIO_SEQ: AtomicU64 = AtomicU64::new(0);

/// Blocking text-to-speech adapter against the public Translate endpoint.
pub struct TranslateTts {
    client: reqwest::blocking::Client,
    lang: String,
    output_dir: PathBuf,
}

impl TranslateTts {
    /// Build an adapter from the speech configuration.
    ///
    /// # Errors
    /// Returns [`SpeechError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            lang: config.lang.clone(),
            output_dir: PathBuf::from(&config.output_dir),
        })
    }

    fn fetch_audio(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.lang.as_str()),
                ("q", text),
            ])
            .send()?
            .error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

impl Narrator for TranslateTts {
    fn narrate(&self, text: &str) -> Result<PathBuf, SpeechError> {
        let audio = self.fetch_audio(text)?;
        let path = unique_audio_path(&self.output_dir);

        std::fs::create_dir_all(&self.output_dir).map_err(|source| SpeechError::Write {
            path: self.output_dir.display().to_string(),
            source,
        })?;
        std::fs::write(&path, &audio).map_err(|source| SpeechError::Write {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!(path = %path.display(), bytes = audio.len(), "narration audio written");
        Ok(path)
    }
}

/// A per-invocation audio path that never collides with a prior one, so
/// concurrent adaptation can never overwrite another request's audio.
pub fn unique_audio_path(dir: &Path) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%3f");
    let seq = AUDIO_SEQ.fetch_add(1, Ordering::Relaxed);
    dir.join(format!("claim-{stamp}-{seq}.mp3"))
}
