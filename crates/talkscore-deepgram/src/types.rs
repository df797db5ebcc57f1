//! Deepgram `/v1/listen` response shapes.
//!
//! Only the fields the scoring pipeline consumes are modeled; everything
//! else in the payload is ignored. All fields default so a sparse payload
//! still deserializes — absence of a whole alternative is the one case
//! treated as an error, at the call site.

use serde::Deserialize;
use talkscore_core::types::{Transcription, WordTiming};

/// Top-level response from the pre-recorded listen endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListenResponse {
    /// Recognition results.
    #[serde(default)]
    pub results: ListenResults,
}

/// The `results` object: one entry per audio channel.
#[derive(Debug, Default, Deserialize)]
pub struct ListenResults {
    /// Per-channel recognition output.
    #[serde(default)]
    pub channels: Vec<ListenChannel>,
}

/// One audio channel's recognition output.
#[derive(Debug, Default, Deserialize)]
pub struct ListenChannel {
    /// Candidate transcriptions, best first.
    #[serde(default)]
    pub alternatives: Vec<ListenAlternative>,
}

/// One candidate transcription.
#[derive(Debug, Default, Deserialize)]
pub struct ListenAlternative {
    /// Full transcript text.
    #[serde(default)]
    pub transcript: String,
    /// Overall confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: f64,
    /// Word-level timings.
    #[serde(default)]
    pub words: Vec<ListenWord>,
}

/// One recognized word with timing.
#[derive(Debug, Default, Deserialize)]
pub struct ListenWord {
    /// The recognized word.
    #[serde(default)]
    pub word: String,
    /// Start offset in seconds.
    #[serde(default)]
    pub start: f64,
    /// End offset in seconds.
    #[serde(default)]
    pub end: f64,
    /// Per-word confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: f64,
}

impl ListenResponse {
    /// Extract the best alternative of the first channel, if any.
    #[must_use]
    pub fn into_best_alternative(self) -> Option<ListenAlternative> {
        self.results
            .channels
            .into_iter()
            .next()
            .and_then(|channel| channel.alternatives.into_iter().next())
    }
}

impl From<ListenAlternative> for Transcription {
    fn from(alt: ListenAlternative) -> Self {
        Self {
            transcript: alt.transcript,
            confidence: alt.confidence,
            words: alt
                .words
                .into_iter()
                .map(|w| WordTiming {
                    word: w.word,
                    start: w.start,
                    end: w.end,
                    confidence: w.confidence,
                })
                .collect(),
        }
    }
}
