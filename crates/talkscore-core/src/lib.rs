//! # talkscore-core
//!
//! Foundation types and the speech feedback scoring pipeline.
//!
//! This crate provides the shared vocabulary the other talkscore crates
//! depend on:
//!
//! - **Transcription types**: [`types::Transcription`], [`types::WordTiming`]
//!   as returned by the speech-to-text provider
//! - **Provider seam**: [`stt::SpeechToText`] trait and [`stt::SttError`]
//! - **Metrics**: [`rate::speaking_rate`] and [`pauses::pause_stats`]
//! - **Scores**: [`scorecard::build_scorecard`] combining the metrics into
//!   a [`types::Scorecard`]
//! - **Narration**: [`feedback::narrate`] turning the numbers into sentences
//! - **Pipeline**: [`pipeline::analyze`], the single entry point mapping one
//!   [`types::Transcription`] to one [`types::Feedback`]
//!
//! The pipeline is a pure, synchronous computation: it performs no I/O,
//! holds no state across calls, and every arithmetic edge case (empty word
//! list, zero-duration utterance) returns a defined neutral value.
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `talkscore-deepgram`, `talkscore-server`,
//! and the `talkscored` binary.

#![deny(unsafe_code)]

pub mod feedback;
pub mod pauses;
pub mod pipeline;
pub mod rate;
pub mod scorecard;
pub mod stt;
pub mod types;
