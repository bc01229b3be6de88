//! Persisted user settings for the generation pipeline.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// User-facing configuration surface.
///
/// Persistence is handled by the host; this struct only defines the shape
/// and defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Chat model used for note generation.
    pub model: String,
    /// OpenAI API key.
    pub api_key: String,
    /// Prompt prefixed to the transcript before completion.
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            prompt: defaults::DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Settings {
    /// Create settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            model: std::env::var(defaults::ENV_MODEL)
                .unwrap_or_else(|_| defaults::DEFAULT_MODEL.to_string()),
            api_key: std::env::var(defaults::ENV_OPENAI_API_KEY).unwrap_or_default(),
            prompt: std::env::var(defaults::ENV_PROMPT)
                .unwrap_or_else(|_| defaults::DEFAULT_PROMPT.to_string()),
        }
    }

    /// Whether an API key appears to be configured. Anything shorter than
    /// two characters is treated as absent.
    pub fn has_api_key(&self) -> bool {
        self.api_key.len() >= 2
    }
}
