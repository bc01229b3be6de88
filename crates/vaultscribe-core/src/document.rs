//! Line-oriented document buffer abstraction.

/// A zero-indexed ordered sequence of text lines.
///
/// Lines never contain `\n`; growth happens by appending lines at the end.
/// Reads past the last line return an empty string, matching editor hosts
/// that treat the document as padded with blank lines.
pub trait DocumentBuffer {
    /// Read the line at `index`, or an empty string when out of range.
    fn line(&self, index: usize) -> String;

    /// Replace the line at `index`. Out-of-range writes extend the document
    /// with blank lines first.
    fn set_line(&mut self, index: usize, text: &str);

    /// Append a new line at the end of the document.
    fn append_line(&mut self, text: &str);

    /// Index of the last line. An empty document has a single blank line.
    fn last_line(&self) -> usize;
}

/// In-memory document buffer, used in tests and as a reference implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    lines: Vec<String>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from text, splitting on `\n`.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Render the document back to text.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Borrow the underlying lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl DocumentBuffer for MemoryDocument {
    fn line(&self, index: usize) -> String {
        self.lines.get(index).cloned().unwrap_or_default()
    }

    fn set_line(&mut self, index: usize, text: &str) {
        while index >= self.lines.len() {
            self.lines.push(String::new());
        }
        self.lines[index] = text.to_string();
    }

    fn append_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn last_line(&self) -> usize {
        self.lines.len() - 1
    }
}
