// Media engine seam: the one playback object the transport drives.
use crate::error::PlaybackError;
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;

/// Notifications pushed by an engine while a clip is loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    MetadataLoaded { duration: f64 },
    PositionChanged { position: f64 },
    Ended,
}

/// Receives engine notifications tagged with the load id they belong to.
pub type EventSink = Rc<dyn Fn(u64, MediaEvent)>;

/// Settles once the platform has accepted or refused a play request.
pub type PlayConfirmation = LocalBoxFuture<'static, Result<(), PlaybackError>>;

pub trait MediaEngine {
    /// Install the sink that notifications are delivered to.
    fn attach(&mut self, sink: EventSink);

    /// Point the engine at a new source. Notifications for this source carry
    /// `load_id`; listeners from earlier loads must stop firing.
    fn load(&mut self, src: &str, load_id: u64);

    fn play(&mut self) -> PlayConfirmation;

    fn pause(&mut self);

    fn seek(&mut self, position: f64);

    /// Output gain in [0, 1].
    fn set_gain(&mut self, gain: f64);
}
