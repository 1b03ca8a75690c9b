//! Audio transcription and speech synthesis.
//!
//! Transcription uploads a local file as a multipart form; speech
//! synthesis is the one endpoint that answers with raw bytes instead of
//! JSON (an MP3 stream by default).

use std::path::Path;

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value, json};

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::{ApiResponse, RequestBody, endpoints};

/// Transcription model used when [`TranscriptionOptions`] carries none.
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";
/// Speech model used when [`SpeechOptions`] carries none.
pub const DEFAULT_SPEECH_MODEL: &str = "tts-1";
/// Voice used when [`SpeechOptions`] carries none.
pub const DEFAULT_SPEECH_VOICE: &str = "alloy";

/// Options for [`Client::transcribe_audio`].
#[derive(Debug, Clone, Default)]
pub struct TranscriptionOptions {
    model: Option<String>,
}

impl TranscriptionOptions {
    /// Create empty options; defaults apply at request time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model (e.g. "whisper-1").
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Options for [`Client::create_speech`].
#[derive(Debug, Clone, Default)]
pub struct SpeechOptions {
    voice: Option<String>,
    model: Option<String>,
}

impl SpeechOptions {
    /// Create empty options; defaults apply at request time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the voice (e.g. "alloy", "echo", "nova").
    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    /// Set the model (e.g. "tts-1" or "tts-1-hd").
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Build the multipart form for a transcription upload.
async fn transcription_form(path: &Path, options: &TranscriptionOptions) -> Result<Form> {
    let contents = tokio::fs::read(path).await?;
    let file_name = path.file_name().map_or_else(
        || "audio".to_owned(),
        |name| name.to_string_lossy().into_owned(),
    );
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let part = Part::bytes(contents)
        .file_name(file_name)
        .mime_str(mime.as_ref())?;

    let model = options
        .model
        .clone()
        .unwrap_or_else(|| DEFAULT_TRANSCRIPTION_MODEL.to_owned());
    Ok(Form::new().text("model", model).part("file", part))
}

fn speech_payload(input: &str, options: &SpeechOptions) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(
        "model".to_owned(),
        json!(options.model.as_deref().unwrap_or(DEFAULT_SPEECH_MODEL)),
    );
    fields.insert("input".to_owned(), json!(input));
    fields.insert(
        "voice".to_owned(),
        json!(options.voice.as_deref().unwrap_or(DEFAULT_SPEECH_VOICE)),
    );
    fields
}

impl Client {
    /// Transcribe a local audio file to text.
    ///
    /// The file's bytes are uploaded as a multipart form together with
    /// the model field; the MIME type is guessed from the file
    /// extension with an octet-stream fallback.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] before any network activity when
    /// `path` does not exist, [`Error::Io`] if reading it fails, and
    /// otherwise the usual [`Error::Transport`] / [`Error::Api`] /
    /// [`Error::Decode`] dispatch errors.
    pub async fn transcribe_audio(
        &self,
        path: impl AsRef<Path>,
        options: TranscriptionOptions,
    ) -> Result<Map<String, Value>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let form = transcription_form(path, &options).await?;
        self.send_multipart(endpoints::AUDIO_TRANSCRIPTIONS, form)
            .await
    }

    /// Synthesize speech from text, returning the raw audio bytes.
    ///
    /// A 200 response is returned unmodified, without any JSON
    /// decoding; error responses carry a JSON payload and surface as
    /// [`Error::Api`] like every other endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] or [`Error::Api`] as described in
    /// the crate-level docs.
    pub async fn create_speech(
        &self,
        input: impl AsRef<str>,
        options: SpeechOptions,
    ) -> Result<Bytes> {
        let payload = speech_payload(input.as_ref(), &options);
        match self
            .send_request(endpoints::AUDIO_SPEECH, RequestBody::Json(payload))
            .await?
        {
            ApiResponse::Binary(audio) => Ok(audio),
            ApiResponse::Json(_) => Err(Error::Api {
                status: 200,
                message: "expected binary audio data".to_owned(),
            }),
        }
    }
}
