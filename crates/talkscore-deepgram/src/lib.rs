//! # talkscore-deepgram
//!
//! Deepgram pre-recorded transcription client implementing the
//! [`SpeechToText`] seam from `talkscore-core`.
//!
//! The audio is sent as a raw binary body to `/v1/listen` with the declared
//! media type as `Content-Type` and token auth. One request, one response:
//! no retries, no streaming — transport failures surface as typed
//! [`SttError`]s for the caller to report.

#![deny(unsafe_code)]

pub mod types;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, instrument};

use talkscore_core::stt::{SpeechToText, SttError};
use talkscore_core::types::Transcription;

use crate::types::ListenResponse;

/// Deepgram client configuration.
///
/// `api_key: None` builds a client that fails every call with
/// [`SttError::MissingApiKey`] — the server still starts, and the
/// misconfiguration is reported per request.
#[derive(Clone, Debug)]
pub struct DeepgramConfig {
    /// Provider API key.
    pub api_key: Option<String>,
    /// Base URL, overridable for tests.
    pub base_url: String,
    /// Transcription model.
    pub model: String,
    /// Transcription language.
    pub language: String,
}

impl Default for DeepgramConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.deepgram.com".to_string(),
            model: "nova-2".to_string(),
            language: "en-US".to_string(),
        }
    }
}

/// Deepgram pre-recorded transcription client.
pub struct DeepgramClient {
    config: DeepgramConfig,
    client: reqwest::Client,
}

impl DeepgramClient {
    /// Create a new client with its own connection pool.
    #[must_use]
    pub fn new(config: DeepgramConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a new client with a shared HTTP client.
    #[must_use]
    pub fn with_client(config: DeepgramConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Perform the listen request and map the payload to a [`Transcription`].
    #[instrument(skip_all, fields(model = %self.config.model, bytes = audio.len()))]
    async fn listen(&self, audio: &[u8], media_type: &str) -> Result<Transcription, SttError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(SttError::MissingApiKey);
        };

        let url = format!("{}/v1/listen", self.config.base_url);
        let query = [
            ("model", self.config.model.as_str()),
            ("language", self.config.language.as_str()),
            ("smart_format", "true"),
            ("punctuate", "true"),
            ("diarize", "true"),
            ("paragraphs", "true"),
        ];

        debug!(%url, media_type, "sending transcription request");

        let response = self
            .client
            .post(&url)
            .query(&query)
            .header(AUTHORIZATION, format!("Token {api_key}"))
            .header(CONTENT_TYPE, media_type)
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| SttError::Request {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SttError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let payload: ListenResponse = response.json().await.map_err(|e| SttError::Decode {
            message: e.to_string(),
        })?;

        payload
            .into_best_alternative()
            .map(Transcription::from)
            .ok_or(SttError::EmptyResult)
    }
}

#[async_trait]
impl SpeechToText for DeepgramClient {
    async fn transcribe(
        &self,
        audio: &[u8],
        media_type: &str,
    ) -> Result<Transcription, SttError> {
        self.listen(audio, media_type).await
    }
}
