//! # talkscore-settings
//!
//! Configuration management with layered sources for the talkscore service.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`TalkscoreSettings::default()`]
//! 2. **Settings file** — optional camelCase JSON, partial files allowed
//!    (missing fields fall back to defaults via `#[serde(default)]`)
//! 3. **Environment variables** — `TALKSCORE_*` and `DEEPGRAM_API_KEY`
//!    overrides (highest priority)
//!
//! The loaded value is immutable: the binary resolves it once at startup
//! and injects it into the server, so the provider credential is never
//! read ad hoc in the middle of a request.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{load_settings, load_settings_from_path};
pub use types::*;
