//! # vaultscribe-inference
//!
//! OpenAI HTTP clients for the vaultscribe pipeline.
//!
//! This crate provides:
//! - Hand-rolled multipart framing for audio uploads
//! - Whisper transcription client
//! - Streaming chat-completion client with an incremental SSE decoder

pub mod multipart;
pub mod openai;
pub mod transcription;

// Re-export core types
pub use vaultscribe_core::*;

pub use multipart::{random_boundary, UploadFrame};
pub use openai::{CompletionClient, EventStream, SseDecoder, StreamEvent};
pub use transcription::TranscriptionClient;
