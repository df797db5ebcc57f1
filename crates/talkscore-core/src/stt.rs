//! The speech-to-text provider seam.
//!
//! The scoring pipeline never performs I/O; everything network-shaped sits
//! behind [`SpeechToText`]. The HTTP implementation lives in
//! `talkscore-deepgram`; server tests substitute a mock at this boundary.

use async_trait::async_trait;

use crate::types::Transcription;

/// Errors surfaced by a speech-to-text provider.
#[derive(Debug, thiserror::Error)]
pub enum SttError {
    /// No provider credential was configured at startup.
    #[error("speech-to-text API key not configured")]
    MissingApiKey,

    /// The request never produced an HTTP response (DNS, TLS, timeout...).
    #[error("speech-to-text request failed: {message}")]
    Request {
        /// Transport-level failure description.
        message: String,
    },

    /// The provider answered with a non-success status.
    #[error("speech-to-text provider returned {status}: {message}")]
    Status {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// The provider responded, but the payload held no transcription.
    #[error("speech-to-text provider returned an empty result")]
    EmptyResult,

    /// The provider payload could not be decoded.
    #[error("failed to decode speech-to-text response: {message}")]
    Decode {
        /// Decoding failure description.
        message: String,
    },
}

/// A provider that turns raw audio bytes into a [`Transcription`].
///
/// Implementations must be cheap to share behind an `Arc` — the server
/// clones one instance into every request.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe a complete audio recording.
    ///
    /// `media_type` is the declared MIME type of `audio` (e.g. `audio/wav`)
    /// and is forwarded to the provider so it can pick the right decoder.
    async fn transcribe(&self, audio: &[u8], media_type: &str)
    -> Result<Transcription, SttError>;
}
