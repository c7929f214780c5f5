use thiserror::Error;

/// Failures reported by a media engine when asked to start or resume playback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// The platform refused the play request (autoplay policy, decode error, ...).
    #[error("playback was rejected: {0}")]
    Rejected(String),
    /// The browser audio element could not be created or attached.
    #[error("no media element is available")]
    NoMediaElement,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid soundboard settings: {0}")]
    Parse(#[from] serde_json::Error),
}
