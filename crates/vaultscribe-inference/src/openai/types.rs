//! OpenAI API request and response types.

use serde::{Deserialize, Serialize};

/// Request body for the chat completions endpoint.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// One streamed chunk envelope.
///
/// Chunks carry either an `error` payload or a `choices` array; a chunk
/// with neither is malformed and surfaced with its raw JSON.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunk {
    #[serde(default)]
    pub error: Option<ApiError>,
    #[serde(default)]
    pub choices: Option<Vec<ChatChunkChoice>>,
}

/// Single choice in a streaming chunk.
#[derive(Debug, Deserialize)]
pub struct ChatChunkChoice {
    #[serde(default)]
    pub delta: ChatDelta,
}

/// Delta content in a streaming response.
#[derive(Debug, Default, Deserialize)]
pub struct ChatDelta {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Error response from the OpenAI API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

/// Detailed error information.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_completion_request_serialization() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo-16k".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "Hello".to_string(),
            }],
            stream: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo-16k");
        assert_eq!(json["stream"], true);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hello");
    }

    #[test]
    fn test_chunk_with_content_delta() {
        let json = r#"{"id":"x","choices":[{"index":0,"delta":{"content":"Hi"},"finish_reason":null}]}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert!(chunk.error.is_none());
        let choices = chunk.choices.unwrap();
        assert_eq!(choices[0].delta.content, Some("Hi".to_string()));
    }

    #[test]
    fn test_chunk_with_role_only_delta() {
        let json = r#"{"choices":[{"delta":{"role":"assistant"}}]}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        let choices = chunk.choices.unwrap();
        assert_eq!(choices[0].delta.role, Some("assistant".to_string()));
        assert!(choices[0].delta.content.is_none());
    }

    #[test]
    fn test_chunk_with_error_payload() {
        let json = r#"{"error":{"message":"The server is overloaded"}}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert!(chunk.choices.is_none());
        assert_eq!(chunk.error.unwrap().message, "The server is overloaded");
    }

    #[test]
    fn test_chunk_without_choices() {
        let json = r#"{"object":"ping"}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert!(chunk.error.is_none());
        assert!(chunk.choices.is_none());
    }

    #[test]
    fn test_api_error_response_deserialization() {
        let json = r#"{"error":{"message":"Invalid API key","type":"invalid_request_error"}}"#;
        let response: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.message, "Invalid API key");
    }
}
