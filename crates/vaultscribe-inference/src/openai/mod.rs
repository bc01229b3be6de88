//! OpenAI-compatible streaming completion support.
//!
//! Works with any endpoint implementing the OpenAI chat-completions API
//! with `stream: true`, including local OpenAI-compatible servers.

mod completion;
mod streaming;
mod types;

pub use completion::{truncate_prompt, CompletionClient};
pub use streaming::{decode_sse_stream, EventStream, SseDecoder, StreamEvent};
pub use types::*;
