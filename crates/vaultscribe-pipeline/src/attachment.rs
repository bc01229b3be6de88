//! Attachment reference extraction and path resolution.
//!
//! Document text may reference an audio file through an embedded link
//! (`[[recording.mp3]]`) or a markdown link (`[label](recording.mp3)`).
//! The matched filename is resolved against the host's attachment-folder
//! convention, falling back to a basename search over the whole store.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use vaultscribe_core::{defaults, Error, FileStore, Result};

/// Ordered reference patterns. Later patterns override earlier ones when
/// both match; within one pattern the last occurrence wins.
static REFERENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let extensions = defaults::AUDIO_EXTENSIONS.join("|");
    vec![
        // Embedded link: [[path/to/file.mp3]]
        Regex::new(&format!(r"\[\[([^\[\]]+\.(?:{}))\]\]", extensions)).unwrap(),
        // Markdown link: [label](path/to/file.mp3)
        Regex::new(&format!(r"\[[^\[\]]*\]\(([^\[\]()]+\.(?:{}))\)", extensions)).unwrap(),
    ]
});

/// An audio reference extracted from document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentReference {
    /// The raw matched link target, before decoding.
    pub raw: String,
    /// Percent-decoded filename with normalized separators.
    pub filename: String,
    /// Extension inferred from the filename.
    pub extension: String,
}

/// Extract the winning audio reference from `text`.
///
/// Patterns are applied in order, each exhausted before the next; the last
/// match found overall wins.
pub fn find_reference(text: &str) -> Option<AttachmentReference> {
    REFERENCE_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .last()
        .map(|target| {
            let raw = target.as_str().to_string();
            let decoded = urlencoding::decode(&raw)
                .map(|c| c.into_owned())
                .unwrap_or_else(|_| raw.clone());
            let filename = normalize_path(&decoded);
            let extension = extension_of(&filename).to_string();
            AttachmentReference {
                raw,
                filename,
                extension,
            }
        })
}

/// Normalize separators and trim the matched filename.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/").trim().trim_matches('/').to_string()
}

fn extension_of(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or("")
}

/// Extension of a resolved path when it is a recognized audio format.
pub fn audio_extension(path: &str) -> Option<&str> {
    let ext = extension_of(path);
    defaults::AUDIO_EXTENSIONS.contains(&ext).then_some(ext)
}

/// Resolve the audio reference in `text` to a store path.
///
/// `attachment_hint` is the host's configured attachment folder: empty or
/// `/` means the store root, a `./` prefix means relative to
/// `current_folder`, anything else names a subfolder of the root. A
/// filename that already carries a path separator bypasses the hint. When
/// the computed path does not exist, every stored file is searched by
/// basename and the first match wins, duplicate basenames included.
pub async fn resolve_attachment(
    text: &str,
    attachment_hint: &str,
    current_folder: &str,
    store: &dyn FileStore,
) -> Result<String> {
    let reference = find_reference(text).ok_or(Error::NoReference)?;
    let filename = reference.filename;

    let file_in_specific_folder = filename.contains('/');
    let hint_is_root = attachment_hint.is_empty() || attachment_hint == "/";
    let hint_is_current_folder = attachment_hint.starts_with("./");

    let full_path = if hint_is_root || file_in_specific_folder {
        filename.clone()
    } else if !hint_is_current_folder {
        format!("{}/{}", attachment_hint, filename)
    } else {
        let subfolder = &attachment_hint[2..];
        if subfolder.is_empty() {
            format!("{}/{}", current_folder, filename)
        } else {
            format!("{}/{}/{}", current_folder, subfolder, filename)
        }
    };

    if store.exists(&full_path).await? {
        return Ok(full_path);
    }

    debug!("{} not found, searching the store by basename", full_path);
    for file in store.list_files().await? {
        if file.name == filename {
            return Ok(file.path);
        }
    }

    Err(Error::AttachmentNotFound(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultscribe_core::MemoryFileStore;

    #[test]
    fn test_embedded_link_reference() {
        let reference = find_reference("some notes [[recording.mp3]] more").unwrap();
        assert_eq!(reference.filename, "recording.mp3");
        assert_eq!(reference.extension, "mp3");
    }

    #[test]
    fn test_markdown_link_reference() {
        let reference = find_reference("listen [here](meeting.m4a)").unwrap();
        assert_eq!(reference.filename, "meeting.m4a");
        assert_eq!(reference.extension, "m4a");
    }

    #[test]
    fn test_last_occurrence_wins_within_pattern() {
        let reference = find_reference("[[first.mp3]] and [[second.mp3]]").unwrap();
        assert_eq!(reference.filename, "second.mp3");
    }

    #[test]
    fn test_later_pattern_overrides_earlier() {
        // The markdown pattern is applied after the embedded pattern, so
        // its match wins even though it appears first in the text.
        let reference = find_reference("[note](md.wav) then [[embedded.mp3]]").unwrap();
        assert_eq!(reference.filename, "md.wav");
    }

    #[test]
    fn test_percent_decoding_and_separators() {
        let reference = find_reference("[[audio%20notes\\day%201.mp3]]").unwrap();
        assert_eq!(reference.filename, "audio notes/day 1.mp3");
    }

    #[test]
    fn test_non_audio_extension_ignored() {
        assert!(find_reference("[[document.pdf]] [link](image.png)").is_none());
        assert!(find_reference("no links at all").is_none());
    }

    #[test]
    fn test_audio_extension_check() {
        assert_eq!(audio_extension("a/b/c.mp3"), Some("mp3"));
        assert_eq!(audio_extension("notes.pdf"), None);
        assert_eq!(audio_extension("noextension"), None);
    }

    #[tokio::test]
    async fn test_root_hint_resolves_filename_as_is() {
        let mut store = MemoryFileStore::new();
        store.insert("note.mp3", vec![1]);

        let path = resolve_attachment("[[note.mp3]]", "", "journal", &store)
            .await
            .unwrap();
        assert_eq!(path, "note.mp3");

        let path = resolve_attachment("[[note.mp3]]", "/", "journal", &store)
            .await
            .unwrap();
        assert_eq!(path, "note.mp3");
    }

    #[tokio::test]
    async fn test_current_folder_hint_with_subfolder() {
        let mut store = MemoryFileStore::new();
        store.insert("journal/recordings/note.mp3", vec![1]);

        let path = resolve_attachment("[[note.mp3]]", "./recordings", "journal", &store)
            .await
            .unwrap();
        assert_eq!(path, "journal/recordings/note.mp3");
    }

    #[tokio::test]
    async fn test_bare_current_folder_hint() {
        let mut store = MemoryFileStore::new();
        store.insert("journal/note.mp3", vec![1]);

        let path = resolve_attachment("[[note.mp3]]", "./", "journal", &store)
            .await
            .unwrap();
        assert_eq!(path, "journal/note.mp3");
    }

    #[tokio::test]
    async fn test_specific_subfolder_hint() {
        let mut store = MemoryFileStore::new();
        store.insert("attachments/note.mp3", vec![1]);

        let path = resolve_attachment("[[note.mp3]]", "attachments", "journal", &store)
            .await
            .unwrap();
        assert_eq!(path, "attachments/note.mp3");
    }

    #[tokio::test]
    async fn test_filename_with_separator_bypasses_hint() {
        let mut store = MemoryFileStore::new();
        store.insert("deep/nested/note.mp3", vec![1]);

        let path = resolve_attachment("[[deep/nested/note.mp3]]", "attachments", "journal", &store)
            .await
            .unwrap();
        assert_eq!(path, "deep/nested/note.mp3");
    }

    #[tokio::test]
    async fn test_fallback_basename_search_first_match() {
        let mut store = MemoryFileStore::new();
        store.insert("somewhere/else/note.mp3", vec![1]);
        store.insert("another/place/note.mp3", vec![2]);

        let path = resolve_attachment("[[note.mp3]]", "attachments", "journal", &store)
            .await
            .unwrap();
        assert_eq!(path, "somewhere/else/note.mp3");
    }

    #[tokio::test]
    async fn test_no_reference_error() {
        let store = MemoryFileStore::new();
        let err = resolve_attachment("plain text", "", "journal", &store)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NoReference));
    }

    #[tokio::test]
    async fn test_missing_file_error() {
        let store = MemoryFileStore::new();
        let err = resolve_attachment("[[ghost.mp3]]", "", "journal", &store)
            .await
            .unwrap_err();
        match err {
            Error::AttachmentNotFound(name) => assert_eq!(name, "ghost.mp3"),
            other => panic!("expected AttachmentNotFound, got {:?}", other),
        }
    }
}
