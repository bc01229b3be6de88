//! File store abstraction over the host's attachment storage.

use async_trait::async_trait;

use crate::error::Result;

/// A file known to the store, by basename and full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Basename including extension.
    pub name: String,
    /// Path relative to the store root.
    pub path: String,
}

/// Read-only access to the host's file store.
///
/// Paths are store-relative with `/` separators. The enumeration is only
/// used for the fallback basename search during attachment resolution.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Check whether a file exists at the given path.
    async fn exists(&self, path: &str) -> Result<bool>;

    /// Read the raw bytes of a file.
    async fn read_binary(&self, path: &str) -> Result<Vec<u8>>;

    /// Enumerate every stored file.
    async fn list_files(&self) -> Result<Vec<StoredFile>>;
}

/// In-memory file store, used in tests and as a reference implementation.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: Vec<(String, Vec<u8>)>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at the given store-relative path.
    pub fn insert(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files.push((path.into(), data.into()));
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.files.iter().any(|(p, _)| p == path))
    }

    async fn read_binary(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, data)| data.clone())
            .ok_or_else(|| crate::error::Error::AttachmentNotFound(path.to_string()))
    }

    async fn list_files(&self) -> Result<Vec<StoredFile>> {
        Ok(self
            .files
            .iter()
            .map(|(path, _)| StoredFile {
                name: path.rsplit('/').next().unwrap_or(path).to_string(),
                path: path.clone(),
            })
            .collect())
    }
}
