//! # talkscore-server
//!
//! Axum HTTP layer for the talkscore service.
//!
//! One analysis endpoint: the caller POSTs base64 audio plus its media
//! type, the audio goes to the speech-to-text provider behind the
//! [`talkscore_core::stt::SpeechToText`] seam, and the scoring pipeline's
//! [`talkscore_core::types::Feedback`] comes back as JSON. Every failure
//! class maps to a `{ "error": "..." }` body with a matching status code —
//! nothing crosses this boundary as a panic.

#![deny(unsafe_code)]

pub mod error;
pub mod media;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
