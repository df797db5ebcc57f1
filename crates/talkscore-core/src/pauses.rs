//! Inter-word pause analysis.
//!
//! Gaps are measured between the end of one word and the start of the next.
//! Overlapping words produce negative gaps; those are averaged as-is so the
//! mean reflects the provider's timing verbatim.

use crate::types::{PauseStats, WordTiming};

/// A pause counts as "long" when it exceeds this many seconds.
pub const LONG_PAUSE_SECONDS: f64 = 1.0;

/// Compute the mean inter-word gap and the number of long pauses.
///
/// Returns [`PauseStats::ZERO`] for sequences with fewer than two words,
/// which have no gaps to measure.
#[must_use]
pub fn pause_stats(words: &[WordTiming]) -> PauseStats {
    if words.len() < 2 {
        return PauseStats::ZERO;
    }

    let mut total = 0.0;
    let mut long_pauses = 0;
    for pair in words.windows(2) {
        let gap = pair[1].start - pair[0].end;
        total += gap;
        if gap > LONG_PAUSE_SECONDS {
            long_pauses += 1;
        }
    }

    PauseStats {
        average_pause_seconds: total / (words.len() - 1) as f64,
        long_pauses,
    }
}
