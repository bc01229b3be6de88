//! Projects streamed content deltas onto a line-oriented document.
//!
//! A write session owns a single cursor for its lifetime. All line
//! advancement happens in [`WriteSession::advance_line`]; deltas with
//! embedded newlines split into fragments with the cursor advancing
//! between fragments, so line accounting stays correct while the document
//! grows underneath the stream.

use vaultscribe_core::DocumentBuffer;

/// An active write session over a document buffer.
///
/// The cursor is monotonically non-decreasing for the session's lifetime.
pub struct WriteSession<'a, D: DocumentBuffer + ?Sized> {
    doc: &'a mut D,
    cursor: usize,
    /// Accumulates content to detect (and drop) model-introduced leading
    /// whitespace before any real content arrives.
    buffered: String,
}

impl<'a, D: DocumentBuffer + ?Sized> WriteSession<'a, D> {
    /// Begin a session at the first blank line at or after `start_line`,
    /// then write the leading blank line that separates generated content
    /// from what precedes it.
    pub fn begin(doc: &'a mut D, start_line: usize) -> Self {
        let cursor = next_blank_line(doc, start_line);
        let mut session = Self {
            doc,
            cursor,
            buffered: String::new(),
        };
        session.advance_line();
        session
    }

    /// Current cursor line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply one content delta at the cursor.
    ///
    /// Deltas arriving before any visible content are trimmed; wholly
    /// whitespace ones are dropped. A delta with `n` embedded newlines
    /// produces `n + 1` fragment writes and `n` cursor advances.
    pub fn apply(&mut self, delta: &str) {
        let text = if self.buffered.is_empty() {
            let trimmed = delta.trim();
            if trimmed.is_empty() {
                return;
            }
            self.buffered.push_str(trimmed);
            trimmed.to_string()
        } else {
            delta.to_string()
        };

        for (i, fragment) in text.split('\n').enumerate() {
            if i > 0 {
                self.advance_line();
            }
            self.append_to_current_line(fragment);
        }
    }

    /// Close the session, appending the trailing blank line.
    pub fn close(mut self) {
        self.advance_line();
    }

    fn append_to_current_line(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        let line = self.doc.line(self.cursor);
        self.doc.set_line(self.cursor, &format!("{}{}", line, fragment));
    }

    fn advance_line(&mut self) {
        self.cursor += 1;
        if self.cursor > self.doc.last_line() {
            self.doc.append_line("");
        }
    }
}

/// First blank line at or after `start`, appending one when the scan runs
/// off the end of the document.
fn next_blank_line<D: DocumentBuffer + ?Sized>(doc: &mut D, start: usize) -> usize {
    let mut line = start;
    while !doc.line(line).trim().is_empty() {
        if line == doc.last_line() {
            doc.append_line("");
        }
        line += 1;
    }
    line
}
