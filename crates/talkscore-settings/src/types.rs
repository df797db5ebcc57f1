//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and `#[serde(default)]`
//! so a partial JSON file only overrides the fields it names. Each type
//! implements [`Default`] with production default values.

use serde::{Deserialize, Serialize};

/// Default maximum accepted audio payload after base64 decoding (50 MB).
pub const DEFAULT_MAX_AUDIO_BYTES: usize = 50 * 1024 * 1024;

/// Root settings type for the talkscore service.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalkscoreSettings {
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Transcription provider settings.
    pub deepgram: DeepgramSettings,
}

impl TalkscoreSettings {
    /// Correct invalid values in place rather than rejecting them, with a
    /// warning, so a bad file still yields a running service.
    pub fn validate(&mut self) {
        if self.server.max_audio_bytes == 0 {
            tracing::warn!(
                "maxAudioBytes of 0 would reject every upload, restored to {DEFAULT_MAX_AUDIO_BYTES}"
            );
            self.server.max_audio_bytes = DEFAULT_MAX_AUDIO_BYTES;
        }
        if self.deepgram.base_url.ends_with('/') {
            let _ = self.deepgram.base_url.pop();
        }
    }
}

/// HTTP listener settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Maximum accepted audio payload in bytes (after base64 decoding).
    pub max_audio_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_audio_bytes: DEFAULT_MAX_AUDIO_BYTES,
        }
    }
}

/// Transcription provider settings.
///
/// `api_key` is the single required credential; it is usually supplied via
/// the `DEEPGRAM_API_KEY` environment variable rather than the file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeepgramSettings {
    /// Provider API key. `None` means unconfigured; requests will fail with
    /// a configuration error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Provider base URL, overridable for tests.
    pub base_url: String,
    /// Transcription model.
    pub model: String,
    /// Transcription language.
    pub language: String,
}

impl Default for DeepgramSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.deepgram.com".to_string(),
            model: "nova-2".to_string(),
            language: "en-US".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_deepgram() {
        let settings = TalkscoreSettings::default();
        assert_eq!(settings.deepgram.base_url, "https://api.deepgram.com");
        assert_eq!(settings.deepgram.model, "nova-2");
        assert!(settings.deepgram.api_key.is_none());
    }

    #[test]
    fn partial_json_keeps_defaults_elsewhere() {
        let settings: TalkscoreSettings =
            serde_json::from_str(r#"{"server":{"port":9999}}"#).unwrap();
        assert_eq!(settings.server.port, 9999);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.deepgram.model, "nova-2");
    }

    #[test]
    fn validate_restores_zero_audio_limit() {
        let mut settings = TalkscoreSettings::default();
        settings.server.max_audio_bytes = 0;
        settings.validate();
        assert_eq!(settings.server.max_audio_bytes, DEFAULT_MAX_AUDIO_BYTES);
    }

    #[test]
    fn validate_trims_trailing_slash_on_base_url() {
        let mut settings = TalkscoreSettings::default();
        settings.deepgram.base_url = "http://localhost:9000/".to_string();
        settings.validate();
        assert_eq!(settings.deepgram.base_url, "http://localhost:9000");
    }

    #[test]
    fn api_key_is_omitted_from_serialized_output() {
        let settings = TalkscoreSettings::default();
        let val = serde_json::to_value(&settings).unwrap();
        assert!(val["deepgram"].get("apiKey").is_none());
    }
}
