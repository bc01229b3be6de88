//! # vaultscribe-pipeline
//!
//! The attachment-to-note pipeline for vaultscribe.
//!
//! This crate provides:
//! - Audio reference extraction and attachment path resolution
//! - A document writer projecting streamed deltas onto lines
//! - Session gating so generation commands never overlap
//! - The end-to-end transcript and text generation commands

pub mod attachment;
pub mod generate;
pub mod session;
pub mod writer;

// Re-export core types
pub use vaultscribe_core::*;

pub use attachment::{audio_extension, find_reference, resolve_attachment, AttachmentReference};
pub use generate::{Generator, NoteContext};
pub use session::{GenerationGate, SessionGuard};
pub use writer::WriteSession;
