//! Application configuration.
//!
//! Loaded from an optional `claimsight.toml` next to the binary; every field
//! has a default so a missing file or a partial file both work. There are
//! deliberately no CLI flags and no environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Configuration load failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config not readable: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config malformed: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Model artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the serialized regression artifact, relative to the
    /// working directory.
    pub path: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_MODEL_PATH.to_string(),
        }
    }
}

/// Narration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Whether successful predictions are narrated at all.
    pub enabled: bool,
    /// Synthesis language code.
    pub lang: String,
    /// Directory the synthesized audio files are written to.
    pub output_dir: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_SPEECH_ENABLED,
            lang: defaults::DEFAULT_SPEECH_LANG.to_string(),
            output_dir: defaults::DEFAULT_AUDIO_DIR.to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load from a TOML file. A missing file yields the defaults; a file
    /// that exists but does not parse is an error.
    ///
    /// # Errors
    /// Returns [`ConfigError`] on unreadable or malformed config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&raw)?)
    }
}
