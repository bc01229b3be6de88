//! Audio transcription client for the OpenAI Whisper endpoint.

use std::time::Duration;

use tracing::debug;

use vaultscribe_core::{defaults, Error, Result};

use crate::multipart::UploadFrame;

/// Client for `/audio/transcriptions`.
pub struct TranscriptionClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl TranscriptionClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            model: defaults::WHISPER_MODEL.to_string(),
            client: reqwest::Client::new(),
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a client against the public OpenAI endpoint.
    pub fn openai() -> Self {
        Self::new(defaults::DEFAULT_OPENAI_URL.to_string())
    }

    /// The transcription model sent in the `model` field.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Transcribe audio bytes, returning the transcript text.
    ///
    /// Fails without a network call when the API key is absent. A 401 from
    /// the endpoint maps to [`Error::InvalidApiKey`]; other failures map to
    /// [`Error::Remote`].
    pub async fn transcribe(&self, audio: &[u8], api_key: &str) -> Result<String> {
        if api_key.len() < 2 {
            return Err(Error::MissingApiKey);
        }

        let frame = UploadFrame::encode(audio, &self.model);
        let url = format!(
            "{}/audio/transcriptions",
            self.base_url.trim_end_matches('/')
        );

        debug!("transcribing {} bytes with {}", audio.len(), self.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", frame.content_type())
            .body(frame.into_body())
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| Error::Remote(format!("Transcription request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::InvalidApiKey);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Remote(format!(
                "Transcription endpoint returned {}: {}",
                status, body
            )));
        }

        let envelope: serde_json::Value = response.json().await?;
        match envelope.get("text").and_then(|t| t.as_str()) {
            Some(text) => Ok(text.to_string()),
            None => Err(Error::Remote(format!(
                "Unexpected transcription response: {}",
                envelope
            ))),
        }
    }
}
