//! Request failure taxonomy and its mapping onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use talkscore_core::stt::SttError;

/// Everything that can go wrong while handling an analysis request.
///
/// Input errors terminate the request before the provider is contacted;
/// provider errors are surfaced with the upstream message where available.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request carried no audio payload.
    #[error("No audio data provided")]
    MissingAudio,

    /// The audio payload was not valid base64.
    #[error("Invalid base64 audio data: {0}")]
    InvalidBase64(String),

    /// The declared media type is not in the accepted set.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The decoded audio exceeds the configured size limit.
    #[error("Audio data too large: {bytes} bytes (max {max})")]
    PayloadTooLarge {
        /// Decoded payload size.
        bytes: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The HTTP method is not supported on this route.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No route matched the request path.
    #[error("Not found")]
    NotFound,

    /// The speech-to-text provider call failed.
    #[error(transparent)]
    Stt(#[from] SttError),
}

impl ApiError {
    /// The HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingAudio
            | Self::InvalidBase64(_)
            | Self::UnsupportedMediaType(_)
            | Self::PayloadTooLarge { .. } => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Stt(SttError::MissingApiKey) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Stt(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
