//! Speaking-rate analysis.
//!
//! Words per minute over the span from the first word's start to the last
//! word's end, mapped onto a banded pace score. Research on presentation
//! delivery puts the comfortable range around 140–170 WPM, which is where
//! the score peaks.

use crate::types::{SpeakingRate, WordTiming};

/// Compute words per minute and the banded pace score.
///
/// Returns [`SpeakingRate::ZERO`] when the sequence has fewer than two
/// words or when the spanned duration is not strictly positive — a
/// zero-length utterance has no defined rate, so it is guarded here rather
/// than allowed to divide by zero.
#[must_use]
pub fn speaking_rate(words: &[WordTiming]) -> SpeakingRate {
    if words.len() < 2 {
        return SpeakingRate::ZERO;
    }
    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        return SpeakingRate::ZERO;
    };

    let duration_minutes = (last.end - first.start) / 60.0;
    if duration_minutes <= 0.0 {
        return SpeakingRate::ZERO;
    }

    let wpm = (words.len() as f64 / duration_minutes).round() as u32;
    SpeakingRate {
        wpm,
        score: pace_score(wpm),
    }
}

/// Map a WPM value onto its pace band score. First match wins.
fn pace_score(wpm: u32) -> f64 {
    if wpm < 120 {
        0.7 // too slow
    } else if wpm > 180 {
        0.8 // too fast
    } else if (140..=170).contains(&wpm) {
        1.0 // optimal
    } else {
        0.9 // good: 120–139 or 171–180
    }
}
