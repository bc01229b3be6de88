//! Error types for vaultscribe.

use thiserror::Error;

/// Result type alias using vaultscribe's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for vaultscribe operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No API key configured (or too short to be one)
    #[error("OpenAI API key is not provided")]
    MissingApiKey,

    /// The endpoint rejected the configured API key
    #[error("OpenAI API key is not valid")]
    InvalidApiKey,

    /// No audio reference matched in the document text
    #[error("No audio file found in the text")]
    NoReference,

    /// A referenced attachment could not be located in the store
    #[error("Attachment not found: {0}")]
    AttachmentNotFound(String),

    /// Remote call failed (transport error or malformed envelope)
    #[error("Remote error: {0}")]
    Remote(String),

    /// A generation session is already running
    #[error("Generator is already in progress")]
    SessionBusy,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Remote(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_api_key() {
        let err = Error::MissingApiKey;
        assert_eq!(err.to_string(), "OpenAI API key is not provided");
    }

    #[test]
    fn test_error_display_invalid_api_key() {
        let err = Error::InvalidApiKey;
        assert_eq!(err.to_string(), "OpenAI API key is not valid");
    }

    #[test]
    fn test_error_display_no_reference() {
        let err = Error::NoReference;
        assert_eq!(err.to_string(), "No audio file found in the text");
    }

    #[test]
    fn test_error_display_attachment_not_found() {
        let err = Error::AttachmentNotFound("note.mp3".to_string());
        assert_eq!(err.to_string(), "Attachment not found: note.mp3");
    }

    #[test]
    fn test_error_display_remote() {
        let err = Error::Remote("connection reset".to_string());
        assert_eq!(err.to_string(), "Remote error: connection reset");
    }

    #[test]
    fn test_error_display_session_busy() {
        let err = Error::SessionBusy;
        assert_eq!(err.to_string(), "Generator is already in progress");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("empty prompt".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty prompt");
    }

    #[test]
    fn test_error_display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.to_string().contains("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number");
        assert!(json_err.is_err());

        let err: Error = json_err.unwrap_err().into();
        match err {
            Error::Serialization(msg) => {
                assert!(!msg.is_empty());
            }
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(get_result().unwrap(), 42);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_error_debug_format() {
        let err = Error::NoReference;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NoReference"));
    }
}
