//! Settings loading: defaults → optional file → environment overrides.

use std::path::Path;

use crate::errors::Result;
use crate::types::TalkscoreSettings;

/// Load settings from an optional file path plus process environment.
///
/// When `path` is `None` (or the file does not exist) the file layer is
/// skipped entirely and defaults apply. A present-but-malformed file is an
/// error: silently ignoring a broken config hides misconfiguration.
pub fn load_settings(path: Option<&Path>) -> Result<TalkscoreSettings> {
    let mut settings = match path {
        Some(p) if p.exists() => load_file(p)?,
        _ => TalkscoreSettings::default(),
    };
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings.validate();
    Ok(settings)
}

/// Load settings from a specific file, with environment overrides applied.
pub fn load_settings_from_path(path: &Path) -> Result<TalkscoreSettings> {
    let mut settings = load_file(path)?;
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings.validate();
    Ok(settings)
}

fn load_file(path: &Path) -> Result<TalkscoreSettings> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Apply environment-variable overrides through an injected lookup.
///
/// The lookup indirection keeps this testable without mutating process
/// environment (which is unsafe to do from a multithreaded test harness).
fn apply_env_overrides<F>(settings: &mut TalkscoreSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup("DEEPGRAM_API_KEY") {
        if !key.is_empty() {
            settings.deepgram.api_key = Some(key);
        }
    }
    if let Some(host) = lookup("TALKSCORE_HOST") {
        settings.server.host = host;
    }
    if let Some(port) = lookup("TALKSCORE_PORT") {
        match port.parse::<u16>() {
            Ok(parsed) => settings.server.port = parsed,
            Err(_) => tracing::warn!(value = %port, "ignoring unparseable TALKSCORE_PORT"),
        }
    }
    if let Some(url) = lookup("TALKSCORE_DEEPGRAM_URL") {
        settings.deepgram.base_url = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    // ── file layer ───────────────────────────────────────────────────────

    #[test]
    fn missing_file_yields_defaults() {
        let settings =
            load_settings(Some(Path::new("/nonexistent/talkscore-settings.json"))).unwrap();
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn file_layer_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"server":{{"port":9000}},"deepgram":{{"model":"nova-3"}}}}"#
        )
        .unwrap();
        let settings = load_settings_from_path(file.path()).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.deepgram.model, "nova-3");
        assert_eq!(settings.deepgram.language, "en-US");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(load_settings_from_path(file.path()).is_err());
    }

    // ── env layer ────────────────────────────────────────────────────────

    #[test]
    fn env_overrides_win_over_defaults() {
        let vars = env(&[
            ("DEEPGRAM_API_KEY", "dg-secret"),
            ("TALKSCORE_PORT", "9123"),
            ("TALKSCORE_DEEPGRAM_URL", "http://localhost:7000"),
        ]);
        let mut settings = TalkscoreSettings::default();
        apply_env_overrides(&mut settings, |k| vars.get(k).cloned());
        assert_eq!(settings.deepgram.api_key.as_deref(), Some("dg-secret"));
        assert_eq!(settings.server.port, 9123);
        assert_eq!(settings.deepgram.base_url, "http://localhost:7000");
    }

    #[test]
    fn empty_api_key_env_is_ignored() {
        let vars = env(&[("DEEPGRAM_API_KEY", "")]);
        let mut settings = TalkscoreSettings::default();
        apply_env_overrides(&mut settings, |k| vars.get(k).cloned());
        assert!(settings.deepgram.api_key.is_none());
    }

    #[test]
    fn unparseable_port_keeps_previous_value() {
        let vars = env(&[("TALKSCORE_PORT", "not-a-port")]);
        let mut settings = TalkscoreSettings::default();
        apply_env_overrides(&mut settings, |k| vars.get(k).cloned());
        assert_eq!(settings.server.port, 8080);
    }
}
