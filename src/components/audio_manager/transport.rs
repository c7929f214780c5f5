// Transport controller: the only code allowed to drive the media engine.
use super::engine::{EventSink, MediaEngine, MediaEvent, PlayConfirmation};
use super::session::{PlayKind, PlayTicket, PlaybackSession, PlaybackState, TransportView};
use crate::catalog::SoundCatalog;
use crate::diagnostics::{log_play_rejected, log_transition};
use crate::error::PlaybackError;

/// A play request handed back to the caller. Await `confirmation` off the
/// handler and pass the result to [`Transport::settle_play`] with `ticket`.
pub struct PendingPlay {
    pub ticket: PlayTicket,
    pub confirmation: PlayConfirmation,
}

pub struct Transport<E: MediaEngine> {
    catalog: SoundCatalog,
    engine: E,
    session: PlaybackSession,
}

impl<E: MediaEngine> Transport<E> {
    pub fn new(catalog: SoundCatalog, mut engine: E, initial_volume: f64) -> Self {
        let session = PlaybackSession::new(initial_volume.clamp(0.0, 1.0));
        engine.set_gain(session.effective_gain());
        Self {
            catalog,
            engine,
            session,
        }
    }

    pub fn catalog(&self) -> &SoundCatalog {
        &self.catalog
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn view(&self) -> TransportView {
        self.session.view()
    }

    pub fn attach_events(&mut self, sink: EventSink) {
        self.engine.attach(sink);
    }

    /// Stop whatever is playing, load `name` from the catalog and start it.
    /// Unknown names leave everything untouched.
    pub fn select_clip(&mut self, name: &str) -> Option<PendingPlay> {
        let clip = self.catalog.get(name)?.clone();

        self.engine.pause();
        self.engine.seek(0.0);

        let session = &mut self.session;
        session.load_id += 1;
        session.position = 0.0;
        session.duration = f64::NAN;
        session.state = PlaybackState::Loaded;
        session.pending = None;

        self.engine.load(&clip.src, session.load_id);
        self.engine.set_gain(session.effective_gain());
        log_transition("select", &format!("{} -> {}", clip.name, clip.src));
        session.current_clip = Some(clip);

        Some(self.request_play(PlayKind::Start))
    }

    pub fn toggle_play_pause(&mut self) -> Option<PendingPlay> {
        if self.session.current_clip.is_none() {
            return None;
        }

        if self.session.is_playing() {
            self.engine.pause();
            self.session.state = PlaybackState::Paused;
            self.session.pending = None;
            log_transition("pause", "");
            None
        } else {
            Some(self.request_play(PlayKind::Resume))
        }
    }

    /// Jump to `fraction` of the clip's duration. Ignored until the duration
    /// is known.
    pub fn seek(&mut self, fraction: f64) {
        if self.session.current_clip.is_none() || !self.session.has_duration() {
            return;
        }
        if !fraction.is_finite() {
            return;
        }

        let target = (fraction * self.session.duration).clamp(0.0, self.session.duration);
        self.engine.seek(target);
        self.session.position = target;
        if self.session.state == PlaybackState::Ended {
            self.session.state = PlaybackState::Paused;
        }
        log_transition("seek", &format!("{target:.2}s"));
    }

    /// Store a new volume. Moving the slider above zero while muted unmutes.
    pub fn set_volume(&mut self, level: f64) {
        if !level.is_finite() {
            return;
        }
        let level = level.clamp(0.0, 1.0);
        self.session.volume = level;
        if self.session.muted && level > 0.0 {
            self.session.muted = false;
        }
        if !self.session.muted {
            self.engine.set_gain(level);
        }
    }

    pub fn toggle_mute(&mut self) {
        self.session.muted = !self.session.muted;
        self.engine.set_gain(self.session.effective_gain());
    }

    /// Apply the outcome of a play request. Results for tickets the session is
    /// no longer waiting on are dropped.
    pub fn settle_play(&mut self, ticket: PlayTicket, result: Result<(), PlaybackError>) {
        if self.session.pending != Some(ticket) {
            log_transition(
                "stale confirmation",
                &format!("generation {}", ticket.generation),
            );
            return;
        }
        self.session.pending = None;

        if let Err(err) = result {
            let clip = self.session.current_clip.as_ref().map(|c| c.name.as_str());
            log_play_rejected(ticket.kind.describe(), clip, &err);
            self.session.state = match ticket.kind {
                PlayKind::Start => PlaybackState::Loaded,
                PlayKind::Resume => PlaybackState::Paused,
            };
        }
    }

    pub fn on_media_event(&mut self, load_id: u64, event: MediaEvent) {
        if load_id != self.session.load_id || self.session.current_clip.is_none() {
            return;
        }

        match event {
            MediaEvent::MetadataLoaded { duration } => {
                self.session.duration = duration;
            }
            MediaEvent::PositionChanged { position } => {
                if position.is_finite() && position >= 0.0 {
                    self.session.position = position;
                }
            }
            MediaEvent::Ended => {
                self.session.state = PlaybackState::Ended;
                self.session.pending = None;
                log_transition("ended", "");
            }
        }
    }

    fn request_play(&mut self, kind: PlayKind) -> PendingPlay {
        self.session.generation += 1;
        let ticket = PlayTicket {
            generation: self.session.generation,
            kind,
        };
        self.session.pending = Some(ticket);
        self.session.state = PlaybackState::Playing;
        PendingPlay {
            ticket,
            confirmation: self.engine.play(),
        }
    }
}
