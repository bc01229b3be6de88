//! # vaultscribe-core
//!
//! Core types, traits, and settings for the vaultscribe pipeline.
//!
//! This crate provides the foundational pieces the other vaultscribe crates
//! depend on:
//! - Error taxonomy and `Result` alias
//! - Default model constants and the token-limit table
//! - User settings shape
//! - Narrow host-facing traits: [`FileStore`] and [`DocumentBuffer`]

pub mod defaults;
pub mod document;
pub mod error;
pub mod settings;
pub mod store;

// Re-export commonly used types at crate root
pub use document::{DocumentBuffer, MemoryDocument};
pub use error::{Error, Result};
pub use settings::Settings;
pub use store::{FileStore, MemoryFileStore, StoredFile};
