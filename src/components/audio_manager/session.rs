// Playback session state and the UI projection derived from it.
use crate::catalog::Clip;
use crate::utils::format_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing selected yet.
    #[default]
    Empty,
    /// Clip loaded, paused at 0.
    Loaded,
    Playing,
    Paused,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKind {
    Start,
    Resume,
}

impl PlayKind {
    pub fn describe(self) -> &'static str {
        match self {
            PlayKind::Start => "start",
            PlayKind::Resume => "resume",
        }
    }
}

/// Identifies one play request. Only the ticket the session is still waiting
/// on may settle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTicket {
    pub generation: u64,
    pub kind: PlayKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    pub current_clip: Option<Clip>,
    pub position: f64,
    /// NaN until the engine reports metadata.
    pub duration: f64,
    pub state: PlaybackState,
    pub volume: f64,
    pub muted: bool,
    pub(super) load_id: u64,
    pub(super) generation: u64,
    pub(super) pending: Option<PlayTicket>,
}

impl PlaybackSession {
    pub fn new(volume: f64) -> Self {
        Self {
            current_clip: None,
            position: 0.0,
            duration: f64::NAN,
            state: PlaybackState::Empty,
            volume,
            muted: false,
            load_id: 0,
            generation: 0,
            pending: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.current_clip.is_some() && self.state == PlaybackState::Playing
    }

    pub fn effective_gain(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    pub fn has_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    #[cfg(test)]
    pub fn pending_play(&self) -> Option<PlayTicket> {
        self.pending
    }

    pub fn view(&self) -> TransportView {
        let play_label = if self.is_playing() && self.pending.is_none() {
            "Pause"
        } else {
            "Play"
        };
        let mute_label = if self.muted { "Unmute" } else { "Mute" };

        let (progress, time_text) = if self.state == PlaybackState::Ended {
            let total = format_time(self.duration);
            (1.0, format!("{total} / {total}"))
        } else if self.has_duration() {
            (
                (self.position / self.duration).clamp(0.0, 1.0),
                format!(
                    "{} / {}",
                    format_time(self.position),
                    format_time(self.duration)
                ),
            )
        } else {
            (0.0, format!("{} / {}", format_time(0.0), format_time(self.duration)))
        };

        TransportView {
            play_label,
            mute_label,
            progress,
            time_text,
        }
    }
}

/// What the transport bar renders. Never stored; rebuilt from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportView {
    pub play_label: &'static str,
    pub mute_label: &'static str,
    /// Fill fraction of the progress track, 0.0 ..= 1.0.
    pub progress: f64,
    pub time_text: String,
}

impl TransportView {
    pub fn progress_percent(&self) -> f64 {
        self.progress * 100.0
    }
}
