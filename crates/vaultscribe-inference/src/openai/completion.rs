//! Streaming chat-completion client.

use tracing::{debug, warn};

use vaultscribe_core::{defaults, Error, Result};

use super::streaming::{decode_sse_stream, EventStream};
use super::types::{ApiErrorResponse, ChatCompletionRequest, ChatMessage};

/// Client for `/chat/completions` with streaming enabled.
pub struct CompletionClient {
    base_url: String,
    client: reqwest::Client,
}

impl CompletionClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client against the public OpenAI endpoint.
    pub fn openai() -> Self {
        Self::new(defaults::DEFAULT_OPENAI_URL.to_string())
    }

    /// Start a streaming completion for `prompt`.
    ///
    /// The prompt is right-truncated to the model's budget when one is
    /// known, and a single period is appended before submission.
    pub async fn stream_completion(
        &self,
        prompt: &str,
        model: &str,
        api_key: &str,
    ) -> Result<EventStream> {
        if api_key.len() < 2 {
            return Err(Error::MissingApiKey);
        }

        let (prompt, truncated) = truncate_prompt(prompt, model);
        if truncated {
            warn!("prompt exceeds the {} budget, shortening", model);
        }
        let mut prompt = prompt;
        prompt.push('.');

        debug!(
            "streaming completion with {}, prompt length {}",
            model,
            prompt.chars().count()
        );

        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            stream: true,
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Accept", "text/event-stream")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Remote(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let fallback = status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string();
            let message = match response.json::<ApiErrorResponse>().await {
                Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
                _ => fallback,
            };
            return Err(Error::Remote(message));
        }

        Ok(decode_sse_stream(response.bytes_stream()))
    }
}

/// Right-truncate `prompt` to the trailing `budget + slack` characters when
/// it exceeds the model's token budget. Models without a known budget are
/// left untouched. Returns the (possibly shortened) prompt and whether
/// truncation happened.
pub fn truncate_prompt(prompt: &str, model: &str) -> (String, bool) {
    let Some(budget) = defaults::token_limit(model) else {
        return (prompt.to_string(), false);
    };

    let total = prompt.chars().count();
    if total <= budget {
        return (prompt.to_string(), false);
    }

    let keep = budget + defaults::TRUNCATION_SLACK;
    if total <= keep {
        return (prompt.to_string(), true);
    }
    let start = prompt
        .char_indices()
        .nth(total - keep)
        .map(|(i, _)| i)
        .unwrap_or(0);
    (prompt[start..].to_string(), true)
}
