//! The full scoring pipeline: one [`Transcription`] in, one [`Feedback`] out.

use tracing::debug;

use crate::feedback::{self, NarratorInput};
use crate::pauses::pause_stats;
use crate::rate::speaking_rate;
use crate::scorecard::build_scorecard;
use crate::types::{Feedback, Transcription};

/// Run the scoring pipeline over a transcription.
///
/// Pure and synchronous: the rate and pause analyzers run independently
/// over the word list, the aggregator combines them with the confidence
/// values, and the narrator renders the sentences. No state survives the
/// call.
#[must_use]
pub fn analyze(transcription: &Transcription) -> Feedback {
    let rate = speaking_rate(&transcription.words);
    let pauses = pause_stats(&transcription.words);
    let scores = build_scorecard(transcription.confidence, &transcription.words, rate);

    let input = NarratorInput {
        confidence: transcription.confidence,
        word_count: transcription.words.len(),
        transcript: &transcription.transcript,
        rate,
        pauses,
    };

    debug!(
        words = input.word_count,
        wpm = rate.wpm,
        long_pauses = pauses.long_pauses,
        overall = scores.overall,
        "scored transcription"
    );

    Feedback {
        scores,
        overall_feedback: feedback::overall_feedback(&input),
        observation: feedback::observation(&input),
    }
}
