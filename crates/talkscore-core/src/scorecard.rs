//! Score aggregation.
//!
//! Combines transcript confidence, per-word confidence, and the speaking
//! rate into the four sub-scores plus the overall score. Every value is
//! rounded to two decimal places before it lands in the [`Scorecard`].

use crate::types::{Scorecard, SpeakingRate, WordTiming};

/// Multiplier rewarding high base confidence in the clarity score.
const CLARITY_BOOST: f64 = 1.2;

/// Confidence below this threshold gets penalized further.
const CONFIDENCE_FLOOR: f64 = 0.7;

/// Penalty multiplier applied to low-confidence transcripts.
const LOW_CONFIDENCE_PENALTY: f64 = 0.8;

/// Round to two decimal places, half away from zero.
///
/// Matches `Math.round(x * 100) / 100` for the non-negative values that
/// flow through the scorecard.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean per-word confidence; defined as 0 for an empty word list.
fn average_word_confidence(words: &[WordTiming]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    words.iter().map(|w| w.confidence).sum::<f64>() / words.len() as f64
}

/// Build the scorecard from the transcript confidence, the word list, and
/// the speaking-rate metric.
///
/// The overall score is recomputed as the mean of the four *rounded*
/// sub-scores, then rounded itself.
#[must_use]
pub fn build_scorecard(confidence: f64, words: &[WordTiming], rate: SpeakingRate) -> Scorecard {
    let clarity = round2((confidence * CLARITY_BOOST).min(1.0));
    let fluency = round2(average_word_confidence(words));
    let penalized = if confidence > CONFIDENCE_FLOOR {
        confidence
    } else {
        confidence * LOW_CONFIDENCE_PENALTY
    };
    let confidence_score = round2(penalized);
    let pace = round2(rate.score);

    Scorecard {
        clarity,
        confidence: confidence_score,
        fluency,
        pace,
        overall: round2((clarity + confidence_score + fluency + pace) / 4.0),
    }
}
