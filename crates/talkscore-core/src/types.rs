//! Transcription input types and feedback output types.
//!
//! Output types use `#[serde(rename_all = "camelCase")]` to match the JSON
//! wire format consumed by the upload UI. Input types mirror what the
//! speech-to-text provider returns and are never mutated by the pipeline.

use serde::{Deserialize, Serialize};

/// One recognized word with its timing and recognition confidence.
///
/// Produced entirely by the speech-to-text provider. `start`/`end` are
/// seconds from the beginning of the recording; `confidence` is in
/// `[0, 1]`. Words arrive ordered by start time and are not re-sorted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordTiming {
    /// The recognized word.
    pub word: String,
    /// Start offset in seconds.
    pub start: f64,
    /// End offset in seconds (≥ `start`).
    pub end: f64,
    /// Per-word recognition confidence in `[0, 1]`.
    pub confidence: f64,
}

impl WordTiming {
    /// Convenience constructor, mostly for tests and fixtures.
    #[must_use]
    pub fn new(word: impl Into<String>, start: f64, end: f64, confidence: f64) -> Self {
        Self {
            word: word.into(),
            start,
            end,
            confidence,
        }
    }
}

/// A complete provider transcription for one recording.
///
/// Immutable input to the scoring pipeline; each request carries its own
/// independent value and nothing is shared across requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// Full transcript text.
    pub transcript: String,
    /// Overall transcript confidence in `[0, 1]`.
    pub confidence: f64,
    /// Word-level timings, ordered as returned by the provider.
    pub words: Vec<WordTiming>,
}

impl Transcription {
    /// An empty transcription (no speech detected).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            transcript: String::new(),
            confidence: 0.0,
            words: Vec::new(),
        }
    }
}

/// Speaking-rate metric derived from word timings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeakingRate {
    /// Rounded words per minute; 0 when undefined (fewer than two words or
    /// a non-positive duration).
    pub wpm: u32,
    /// Normalized pace score in `[0, 1]`.
    pub score: f64,
}

impl SpeakingRate {
    /// The neutral metric for sequences that carry no usable timing.
    pub const ZERO: Self = Self { wpm: 0, score: 0.0 };
}

/// Inter-word pause statistics derived from word timings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PauseStats {
    /// Mean gap between adjacent words in seconds. Gaps may be negative
    /// when words overlap; they are averaged as-is.
    pub average_pause_seconds: f64,
    /// Number of gaps strictly longer than one second.
    pub long_pauses: usize,
}

impl PauseStats {
    /// The neutral statistic for sequences with fewer than two words.
    pub const ZERO: Self = Self {
        average_pause_seconds: 0.0,
        long_pauses: 0,
    };
}

/// The five sub-scores returned to the caller, each rounded to two
/// decimal places.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    /// Articulation clarity, `min(confidence × 1.2, 1)`.
    pub clarity: f64,
    /// Transcript confidence, penalized below 0.7.
    pub confidence: f64,
    /// Mean per-word confidence.
    pub fluency: f64,
    /// Speaking-rate band score.
    pub pace: f64,
    /// Mean of the four sub-scores above.
    pub overall: f64,
}

/// The externally visible analysis result for one upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Numeric scorecard.
    pub scores: Scorecard,
    /// Narrative feedback sentences joined by single spaces.
    pub overall_feedback: String,
    /// Fixed-format transcript summary.
    pub observation: String,
}
