//! Shared request-handling state.

use std::sync::Arc;

use talkscore_core::stt::SpeechToText;

/// State cloned into every request handler.
///
/// Holds the provider client (behind the [`SpeechToText`] seam so tests can
/// substitute a mock) and the decoded-audio size limit. The provider
/// credential lives inside the client, resolved once at startup.
#[derive(Clone)]
pub struct AppState {
    /// Speech-to-text provider.
    pub stt: Arc<dyn SpeechToText>,
    /// Maximum accepted decoded audio payload in bytes.
    pub max_audio_bytes: usize,
}

impl AppState {
    /// Build the state from a provider client and the configured limit.
    #[must_use]
    pub fn new(stt: Arc<dyn SpeechToText>, max_audio_bytes: usize) -> Self {
        Self {
            stt,
            max_audio_bytes,
        }
    }
}
