//! End-to-end generation commands.
//!
//! Ties the pipeline together: resolve the referenced audio attachment,
//! transcribe it, and stream the reformatted note into the document below
//! the cursor. A [`GenerationGate`] keeps commands from overlapping.

use futures::StreamExt;
use tracing::{debug, info};

use vaultscribe_core::{DocumentBuffer, Error, FileStore, Result, Settings};
use vaultscribe_inference::{CompletionClient, StreamEvent, TranscriptionClient};

use crate::attachment::{audio_extension, resolve_attachment};
use crate::session::GenerationGate;
use crate::writer::WriteSession;

/// Where the active note sits in the store, for attachment resolution.
#[derive(Debug, Clone, Default)]
pub struct NoteContext {
    /// Host-configured attachment folder hint.
    pub attachment_hint: String,
    /// Folder containing the active note.
    pub current_folder: String,
}

/// Runs generation commands against the configured endpoints.
pub struct Generator {
    settings: Settings,
    gate: GenerationGate,
    transcription: TranscriptionClient,
    completion: CompletionClient,
}

impl Generator {
    /// Create a generator against the public OpenAI endpoints.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            gate: GenerationGate::new(),
            transcription: TranscriptionClient::openai(),
            completion: CompletionClient::openai(),
        }
    }

    /// Create a generator against a custom OpenAI-compatible endpoint.
    pub fn with_base_url(settings: Settings, base_url: &str) -> Self {
        Self {
            settings,
            gate: GenerationGate::new(),
            transcription: TranscriptionClient::new(base_url.to_string()),
            completion: CompletionClient::new(base_url.to_string()),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The gate shared by every command on this generator.
    pub fn gate(&self) -> &GenerationGate {
        &self.gate
    }

    /// Transcribe the audio referenced in `text_before_cursor` and stream a
    /// reformatted note into `doc` below `cursor_line`.
    ///
    /// Resolution and the binary read happen before the gate is taken, so a
    /// rejected command never touches the network or the document.
    pub async fn generate_transcript_note<D: DocumentBuffer + ?Sized>(
        &self,
        doc: &mut D,
        store: &dyn FileStore,
        context: &NoteContext,
        text_before_cursor: &str,
        cursor_line: usize,
    ) -> Result<()> {
        let path = resolve_attachment(
            text_before_cursor,
            &context.attachment_hint,
            &context.current_folder,
            store,
        )
        .await?;
        if audio_extension(&path).is_none() {
            return Err(Error::NoReference);
        }

        let audio = store.read_binary(&path).await?;
        let _guard = self.gate.acquire()?;

        info!("generating transcript for {}", path);
        let transcript = self
            .transcription
            .transcribe(&audio, &self.settings.api_key)
            .await?;
        debug!("transcript is {} characters, reformatting", transcript.len());

        let prompt = format!("{}{}", self.settings.prompt, transcript);
        self.stream_into(doc, &prompt, cursor_line).await
    }

    /// Stream a completion for `prompt` into `doc` below `cursor_line`.
    pub async fn generate_text<D: DocumentBuffer + ?Sized>(
        &self,
        doc: &mut D,
        prompt: &str,
        cursor_line: usize,
    ) -> Result<()> {
        if prompt.is_empty() {
            return Err(Error::InvalidInput("Cannot find prompt".to_string()));
        }
        let _guard = self.gate.acquire()?;
        self.stream_into(doc, prompt, cursor_line).await
    }

    async fn stream_into<D: DocumentBuffer + ?Sized>(
        &self,
        doc: &mut D,
        prompt: &str,
        cursor_line: usize,
    ) -> Result<()> {
        let mut events = self
            .completion
            .stream_completion(prompt, &self.settings.model, &self.settings.api_key)
            .await?;

        let mut session = WriteSession::begin(doc, cursor_line);
        while let Some(event) = events.next().await {
            match event? {
                StreamEvent::Delta(text) => session.apply(&text),
                StreamEvent::Error(message) => return Err(Error::Remote(message)),
                StreamEvent::Done => break,
            }
        }
        session.close();
        info!("generation complete");
        Ok(())
    }
}
