// Tracks the event sink and the clip currently loaded, so whichever of
// `attach` and `load` happens second can wire up the subscription.
use super::engine::EventSink;

#[derive(Default)]
pub struct SinkSlot {
    sink: Option<EventSink>,
    live_load: Option<u64>,
}

impl SinkSlot {
    /// Store `sink`. Returns the load that must be subscribed right away, if a
    /// clip was loaded before any sink existed.
    pub fn attach(&mut self, sink: EventSink) -> Option<(u64, EventSink)> {
        self.sink = Some(sink.clone());
        self.live_load.map(|load_id| (load_id, sink))
    }

    /// Record `load_id` as the live load. Returns the sink to subscribe it
    /// with, if one is attached.
    pub fn begin_load(&mut self, load_id: u64) -> Option<EventSink> {
        self.live_load = Some(load_id);
        self.sink.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::audio_manager::MediaEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_sink() -> (EventSink, Rc<RefCell<Vec<(u64, MediaEvent)>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink: EventSink = {
            let seen = seen.clone();
            Rc::new(move |load_id: u64, event: MediaEvent| seen.borrow_mut().push((load_id, event)))
        };
        (sink, seen)
    }

    #[test]
    fn attach_without_load_subscribes_nothing() {
        let mut slot = SinkSlot::default();
        let (sink, _) = recording_sink();
        assert!(slot.attach(sink).is_none());
    }

    #[test]
    fn load_after_attach_gets_the_sink() {
        let mut slot = SinkSlot::default();
        let (sink, seen) = recording_sink();
        slot.attach(sink);

        let sink = slot.begin_load(3).unwrap();
        sink(3, MediaEvent::Ended);
        assert_eq!(*seen.borrow(), vec![(3, MediaEvent::Ended)]);
    }

    #[test]
    fn attach_after_load_subscribes_the_live_clip() {
        let mut slot = SinkSlot::default();
        assert!(slot.begin_load(1).is_none());
        assert!(slot.begin_load(2).is_none());

        let (sink, seen) = recording_sink();
        let (load_id, sink) = slot.attach(sink).unwrap();
        assert_eq!(load_id, 2);
        sink(load_id, MediaEvent::MetadataLoaded { duration: 4.0 });
        assert_eq!(
            *seen.borrow(),
            vec![(2, MediaEvent::MetadataLoaded { duration: 4.0 })]
        );
    }
}
