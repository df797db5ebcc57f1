//! Upload media-type validation and base64 normalization.

/// Media types the analysis endpoint accepts.
///
/// The base set (MPEG audio, WAV) plus the extended container formats the
/// upload UI offers. Vendor `x-` spellings are included because browsers
/// disagree on them.
pub const SUPPORTED_MEDIA_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp3",
    "audio/wav",
    "audio/x-wav",
    "audio/mp4",
    "audio/m4a",
    "audio/x-m4a",
    "audio/flac",
    "audio/x-flac",
    "audio/ogg",
];

/// Whether the declared media type is accepted, ignoring any
/// `;codecs=...` parameter suffix.
#[must_use]
pub fn is_supported(media_type: &str) -> bool {
    let essence = media_type
        .split(';')
        .next()
        .unwrap_or(media_type)
        .trim()
        .to_ascii_lowercase();
    SUPPORTED_MEDIA_TYPES.contains(&essence.as_str())
}

/// Strip a data URI prefix from base64-encoded audio.
///
/// Browsers often submit `data:audio/wav;base64,AAAA...`; this extracts the
/// raw base64 portion after the `;base64,` marker. Plain base64 passes
/// through unchanged.
#[must_use]
pub fn normalize_base64(input: &str) -> &str {
    match input.find(";base64,") {
        Some(idx) => &input[idx + 8..],
        None => input,
    }
}
