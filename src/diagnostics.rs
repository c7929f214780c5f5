use crate::error::PlaybackError;
use dioxus::logger::tracing;

#[inline]
pub fn log_play_rejected(kind: &str, clip: Option<&str>, err: &PlaybackError) {
    match clip {
        Some(name) => tracing::error!("[transport] {kind} failed for \"{name}\": {err}"),
        None => tracing::error!("[transport] {kind} failed: {err}"),
    }
}

#[inline]
pub fn log_transition(scope: &str, details: &str) {
    if details.trim().is_empty() {
        tracing::debug!("[transport] {scope}");
    } else {
        tracing::debug!("[transport] {scope} | {details}");
    }
}
