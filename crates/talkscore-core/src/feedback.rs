//! Narrative feedback generation.
//!
//! A fixed decision table: an ordered list of independent
//! (predicate, sentence) pairs evaluated top to bottom. Each predicate is
//! self-contained — tier exclusivity is encoded in the predicate itself, so
//! no rule depends on another having fired. The only accumulator is the
//! output sentence list.

use crate::types::{PauseStats, SpeakingRate};

/// Everything the decision table looks at for one transcription.
#[derive(Clone, Copy, Debug)]
pub struct NarratorInput<'a> {
    /// Overall transcript confidence in `[0, 1]`.
    pub confidence: f64,
    /// Number of recognized words.
    pub word_count: usize,
    /// Full transcript text.
    pub transcript: &'a str,
    /// Speaking-rate metric.
    pub rate: SpeakingRate,
    /// Pause statistics.
    pub pauses: PauseStats,
}

/// One row of the decision table.
struct Rule {
    applies: fn(&NarratorInput<'_>) -> bool,
    sentence: &'static str,
}

/// The feedback decision table, in narration order: confidence tier,
/// speaking-rate tier, pauses, sample length, then the empty-transcript
/// note (which coexists with whatever fired above it).
///
/// The 120–139 and 171–180 WPM bands intentionally emit no pace sentence
/// even though they score 0.9.
static RULES: &[Rule] = &[
    Rule {
        applies: |i| i.confidence > 0.9,
        sentence: "Excellent speech clarity and articulation.",
    },
    Rule {
        applies: |i| i.confidence > 0.7 && i.confidence <= 0.9,
        sentence: "Good speech quality with clear pronunciation.",
    },
    Rule {
        applies: |i| i.confidence > 0.5 && i.confidence <= 0.7,
        sentence: "Speech could be clearer. Consider speaking more slowly and distinctly.",
    },
    Rule {
        applies: |i| i.confidence <= 0.5,
        sentence: "Poor audio quality detected. Consider improving recording conditions.",
    },
    Rule {
        applies: |i| i.rate.wpm < 120,
        sentence: "Speaking pace is quite slow - consider increasing your rate slightly.",
    },
    Rule {
        applies: |i| i.rate.wpm > 180,
        sentence: "Speaking pace is very fast - consider slowing down for better comprehension.",
    },
    Rule {
        applies: |i| (140..=170).contains(&i.rate.wpm),
        sentence: "Excellent speaking pace for clear communication.",
    },
    Rule {
        applies: |i| i.pauses.long_pauses as f64 > i.word_count as f64 / 20.0,
        sentence: "Consider reducing long pauses for better flow.",
    },
    Rule {
        applies: |i| i.word_count < 10,
        sentence: "Very brief speech sample - consider providing a longer recording for better analysis.",
    },
    Rule {
        applies: |i| i.word_count > 100,
        sentence: "Good length speech sample for comprehensive analysis.",
    },
    Rule {
        applies: |i| i.transcript.is_empty(),
        sentence: "No speech detected in the audio file.",
    },
];

/// Evaluate the decision table and return the matching sentences in order.
#[must_use]
pub fn narrate(input: &NarratorInput<'_>) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| rule.sentence)
        .collect()
}

/// The matching sentences joined by single spaces.
#[must_use]
pub fn overall_feedback(input: &NarratorInput<'_>) -> String {
    narrate(input).join(" ")
}

/// Fixed-format transcript summary embedding word count, WPM, and the
/// verbatim transcript in quotes.
#[must_use]
pub fn observation(input: &NarratorInput<'_>) -> String {
    format!(
        "Transcript ({} words, {} WPM): \"{}\"",
        input.word_count, input.rate.wpm, input.transcript
    )
}
