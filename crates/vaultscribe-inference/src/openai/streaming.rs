//! Incremental SSE decoding for streamed chat completions.
//!
//! The response body arrives as arbitrary byte chunks; frame boundaries and
//! multi-byte characters do not respect read boundaries. [`SseDecoder`]
//! carries undecoded trailing bytes and the current partial line across
//! reads so each complete `data:` frame decodes exactly once.

use std::collections::VecDeque;
use std::pin::Pin;

use futures::{Stream, StreamExt};

use vaultscribe_core::{Error, Result};

use super::types::ChatCompletionChunk;

/// Terminal sentinel frame.
const DONE_SENTINEL: &str = "data: [DONE]";

/// One decoded event from the completion stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Incremental content to append to the document.
    Delta(String),
    /// Error payload carried inside the stream body.
    Error(String),
    /// The stream finished normally.
    Done,
}

/// Stream of decoded events.
pub struct EventStream(Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>);

impl std::fmt::Debug for EventStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EventStream")
    }
}

impl Stream for EventStream {
    type Item = Result<StreamEvent>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.get_mut().0.as_mut().poll_next(cx)
    }
}

/// Stateful decoder turning raw byte chunks into [`StreamEvent`]s.
#[derive(Debug, Default)]
pub struct SseDecoder {
    /// Undecoded bytes carried across reads (at most one partial character).
    bytes: Vec<u8>,
    /// Partial line carried across reads.
    line: String,
    /// Latched once the done sentinel is seen; later input is ignored.
    done: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of raw bytes, returning every event it completes.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<StreamEvent>> {
        if self.done {
            return Ok(Vec::new());
        }

        self.bytes.extend_from_slice(chunk);
        let text = drain_complete_utf8(&mut self.bytes)?;
        self.line.push_str(&text);

        let mut events = Vec::new();
        while let Some(pos) = self.line.find('\n') {
            let frame: String = self.line.drain(..=pos).collect();
            if let Some(event) = self.decode_frame(&frame)? {
                let finished = event == StreamEvent::Done;
                events.push(event);
                if finished {
                    break;
                }
            }
        }
        Ok(events)
    }

    /// Flush the trailing partial line once the byte stream ends.
    pub fn finish(&mut self) -> Result<Option<StreamEvent>> {
        if self.done || self.line.trim().is_empty() {
            return Ok(None);
        }
        let frame = std::mem::take(&mut self.line);
        self.decode_frame(&frame)
    }

    /// Decode one newline-delimited frame.
    ///
    /// Returns `None` for frames without payload: blank lines, comments,
    /// non-`data:` fields, and role-only deltas.
    fn decode_frame(&mut self, frame: &str) -> Result<Option<StreamEvent>> {
        let frame = frame.trim();

        if frame == DONE_SENTINEL {
            self.done = true;
            return Ok(Some(StreamEvent::Done));
        }

        let Some(data) = frame.strip_prefix("data:") else {
            return Ok(None);
        };
        let data = data.trim_start();
        if data.is_empty() {
            return Ok(None);
        }

        let chunk: ChatCompletionChunk = serde_json::from_str(data)?;
        if let Some(error) = chunk.error {
            return Ok(Some(StreamEvent::Error(error.message)));
        }
        let Some(choices) = chunk.choices else {
            return Ok(Some(StreamEvent::Error(data.to_string())));
        };
        if let Some(content) = choices.into_iter().next().and_then(|c| c.delta.content) {
            return Ok(Some(StreamEvent::Delta(content)));
        }
        Ok(None)
    }
}

/// Split off the longest valid UTF-8 prefix, leaving an incomplete trailing
/// character (if any) in `buf` for the next read.
fn drain_complete_utf8(buf: &mut Vec<u8>) -> Result<String> {
    match std::str::from_utf8(buf) {
        Ok(_) => {
            let head = std::mem::take(buf);
            Ok(String::from_utf8_lossy(&head).into_owned())
        }
        Err(e) => {
            if e.error_len().is_some() {
                return Err(Error::Serialization(format!(
                    "invalid UTF-8 in event stream: {}",
                    e
                )));
            }
            let tail = buf.split_off(e.valid_up_to());
            let head = std::mem::replace(buf, tail);
            Ok(String::from_utf8_lossy(&head).into_owned())
        }
    }
}

/// Decode a transport byte stream into an [`EventStream`].
///
/// The result terminates when [`StreamEvent::Done`] is decoded or the
/// transport stream ends, flushing any final unterminated frame.
pub fn decode_sse_stream<S>(stream: S) -> EventStream
where
    S: Stream<Item = std::result::Result<bytes::Bytes, reqwest::Error>> + Send + 'static,
{
    struct State {
        inner: Pin<Box<dyn Stream<Item = std::result::Result<bytes::Bytes, reqwest::Error>> + Send>>,
        decoder: SseDecoder,
        pending: VecDeque<Result<StreamEvent>>,
        flushed: bool,
    }

    let state = State {
        inner: Box::pin(stream),
        decoder: SseDecoder::new(),
        pending: VecDeque::new(),
        flushed: false,
    };

    EventStream(Box::pin(futures::stream::unfold(state, |mut st| async move {
        loop {
            if let Some(event) = st.pending.pop_front() {
                return Some((event, st));
            }
            if st.flushed {
                return None;
            }
            match st.inner.next().await {
                Some(Ok(bytes)) => match st.decoder.push(&bytes) {
                    Ok(events) => st.pending.extend(events.into_iter().map(Ok)),
                    Err(e) => st.pending.push_back(Err(e)),
                },
                Some(Err(e)) => st
                    .pending
                    .push_back(Err(Error::Remote(format!("Stream error: {}", e)))),
                None => {
                    st.flushed = true;
                    match st.decoder.finish() {
                        Ok(Some(event)) => st.pending.push_back(Ok(event)),
                        Ok(None) => {}
                        Err(e) => st.pending.push_back(Err(e)),
                    }
                }
            }
        }
    })))
}
