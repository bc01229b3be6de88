//! Default configuration values and model constants.

/// Default OpenAI API endpoint.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

/// Default chat model for note generation.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-16k";

/// Transcription model sent in the multipart `model` field.
pub const WHISPER_MODEL: &str = "whisper-1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Slack added on top of a model's token budget when right-truncating a
/// prompt. Character counting is a generous stand-in for tokenization, not
/// an exact accounting.
pub const TRUNCATION_SLACK: usize = 300;

/// Audio file extensions recognized in attachment references.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "mp4", "mpeg", "mpga", "m4a", "wav", "webm"];

/// Default prompt prefixed to the transcript before completion.
pub const DEFAULT_PROMPT: &str = "You are an expert note-making AI. Notes will be added to a \
    markdown vault where all notes are linked by categories, tags, etc. The following is a \
    transcription of a recording of someone talking aloud or people in a conversation. There \
    may be a lot of random things that are said given fluidity of conversation or thought \
    process and the microphone's ability to pick up all audio. Make an outline of all topics \
    and points within a structured hierarchy. Then go into detail with summaries that explain \
    things more eloquently. Finally, create a mermaid chart code that complements the \
    outline. The following is the transcribed audio:\n\n";

/// Environment variable for the API key.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Environment variable for the chat model override.
pub const ENV_MODEL: &str = "VAULTSCRIBE_MODEL";

/// Environment variable for the prompt override.
pub const ENV_PROMPT: &str = "VAULTSCRIBE_PROMPT";

/// Maximum prompt length (in characters standing in for tokens) per model.
///
/// Unknown models have no budget; callers must skip truncation rather than
/// assume one.
pub fn token_limit(model: &str) -> Option<usize> {
    match model {
        "gpt-3.5-turbo" => Some(4096),
        "gpt-3.5-turbo-16k" => Some(16000),
        "gpt-3.5-turbo-0301" => Some(4096),
        "text-davinci-003" => Some(4097),
        "text-davinci-002" => Some(4097),
        "code-davinci-002" => Some(8001),
        "code-davinci-001" => Some(8001),
        "gpt-4" => Some(8192),
        "gpt-4-0314" => Some(8192),
        "gpt-4-32k" => Some(32768),
        "gpt-4-32k-0314" => Some(32768),
        _ => None,
    }
}
