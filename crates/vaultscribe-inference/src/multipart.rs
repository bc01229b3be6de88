//! Multipart/form-data framing for audio uploads.
//!
//! The transcription endpoint takes a two-part body: the raw audio bytes
//! under the `file` field and the transcription model name under `model`.
//! The frame is built by hand so the payload passes through byte-for-byte.
//! Binary safety relies solely on the boundary token being unique in the
//! payload, which is probabilistic; collisions are a documented non-goal.

use rand::Rng;

/// Number of random characters in a boundary token.
const BOUNDARY_RANDOM_LEN: usize = 16;

/// Base-36 alphabet for boundary tokens.
const BOUNDARY_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Filename declared for the audio part.
const UPLOAD_FILENAME: &str = "audio.mp3";

/// Generate a fresh boundary token: a fixed prefix plus 16 random base-36
/// characters.
pub fn random_boundary() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..BOUNDARY_RANDOM_LEN)
        .map(|_| BOUNDARY_CHARSET[rng.gen_range(0..BOUNDARY_CHARSET.len())] as char)
        .collect();
    format!("WebKitFormBoundary{}", suffix)
}

/// A fully framed multipart upload body.
#[derive(Debug, Clone)]
pub struct UploadFrame {
    boundary: String,
    body: Vec<u8>,
}

impl UploadFrame {
    /// Frame `payload` and `model` into a multipart body with a fresh
    /// random boundary.
    pub fn encode(payload: &[u8], model: &str) -> Self {
        Self::with_boundary(random_boundary(), payload, model)
    }

    /// Frame with a caller-supplied boundary token.
    pub fn with_boundary(boundary: String, payload: &[u8], model: &str) -> Self {
        let opening = format!(
            "------{}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{}\"\r\nContent-Type: \"application/octet-stream\"\r\n\r\n",
            boundary, UPLOAD_FILENAME
        );
        let closing = format!(
            "\r\n------{b}\r\nContent-Disposition: form-data; \
             name=\"model\"\r\n\r\n{m}\r\n------{b}--\r\n",
            b = boundary,
            m = model
        );

        let mut body = Vec::with_capacity(opening.len() + payload.len() + closing.len());
        body.extend_from_slice(opening.as_bytes());
        body.extend_from_slice(payload);
        body.extend_from_slice(closing.as_bytes());

        Self { boundary, body }
    }

    /// Value for the transport `Content-Type` header. The declared boundary
    /// is the token prefixed with four dashes; part delimiters in the body
    /// are that plus the standard `--`.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary=----{}", self.boundary)
    }

    /// The boundary token used in this frame.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Borrow the framed body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the frame, yielding the body for use as a request body.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}
