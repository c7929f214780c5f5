// Engine used off the web target: accepts every command, produces no sound
// and no notifications.
use super::engine::{EventSink, MediaEngine, PlayConfirmation};
use futures_util::future::{ready, FutureExt};

#[derive(Debug, Default)]
pub struct DetachedEngine;

impl DetachedEngine {
    pub fn new() -> Self {
        Self
    }
}

impl MediaEngine for DetachedEngine {
    fn attach(&mut self, _sink: EventSink) {}

    fn load(&mut self, _src: &str, _load_id: u64) {}

    fn play(&mut self) -> PlayConfirmation {
        ready(Ok(())).boxed_local()
    }

    fn pause(&mut self) {}

    fn seek(&mut self, _position: f64) {}

    fn set_gain(&mut self, _gain: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SoundCatalog;
    use crate::components::audio_manager::Transport;
    use crate::settings::SoundboardSettings;

    #[test]
    fn detached_engine_confirms_immediately() {
        let catalog = SoundCatalog::from_entries(&SoundboardSettings::default().clips);
        let mut transport = Transport::new(catalog, DetachedEngine::new(), 0.5);
        let pending = transport.select_clip("bike").unwrap();
        let result = pending.confirmation.now_or_never().unwrap();
        transport.settle_play(pending.ticket, result);
        assert_eq!(transport.view().play_label, "Pause");
    }
}
