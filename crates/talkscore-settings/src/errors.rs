//! Settings error types.

/// Errors from loading or parsing the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for the expected shape.
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
