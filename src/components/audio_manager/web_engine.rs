// Browser engine backed by a single hidden <audio> element.
use super::engine::{EventSink, MediaEngine, MediaEvent, PlayConfirmation};
use super::sink_slot::SinkSlot;
use crate::error::PlaybackError;
use futures_util::future::{ready, FutureExt};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlAudioElement};

const AUDIO_ELEMENT_ID: &str = "soundboard-audio";

/// Initialize the global audio element once.
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "auto").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// Best-effort text for a rejected `play()` promise (`NotAllowedError: ...`).
fn js_error_message(err: &JsValue) -> String {
    let field = |name: &str| {
        js_sys::Reflect::get(err, &name.into())
            .ok()
            .and_then(|value| value.as_string())
            .filter(|value| !value.trim().is_empty())
    };
    match (field("name"), field("message")) {
        (Some(name), Some(message)) => format!("{name}: {message}"),
        (None, Some(message)) => message,
        (Some(name), None) => name,
        (None, None) => err
            .as_string()
            .unwrap_or_else(|| "unknown error".to_string()),
    }
}

/// DOM listeners for one load. Dropping it detaches them.
struct Subscription {
    target: HtmlAudioElement,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

impl Subscription {
    fn new(audio: &HtmlAudioElement, load_id: u64, sink: EventSink) -> Self {
        let mut subscription = Self {
            target: audio.clone(),
            listeners: Vec::with_capacity(3),
        };

        {
            let audio = audio.clone();
            let sink = sink.clone();
            subscription.listen("loadedmetadata", move || {
                sink(
                    load_id,
                    MediaEvent::MetadataLoaded {
                        duration: audio.duration(),
                    },
                );
            });
        }
        {
            let audio = audio.clone();
            let sink = sink.clone();
            subscription.listen("timeupdate", move || {
                sink(
                    load_id,
                    MediaEvent::PositionChanged {
                        position: audio.current_time(),
                    },
                );
            });
        }
        subscription.listen("ended", move || sink(load_id, MediaEvent::Ended));

        subscription
    }

    fn listen<F>(&mut self, event: &'static str, handler: F)
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let _ = self
            .target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        self.listeners.push((event, callback));
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for (event, callback) in &self.listeners {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    }
}

pub struct WebAudioEngine {
    audio: Option<HtmlAudioElement>,
    sinks: SinkSlot,
    subscription: Option<Subscription>,
}

impl WebAudioEngine {
    pub fn new() -> Self {
        Self {
            audio: get_or_create_audio_element(),
            sinks: SinkSlot::default(),
            subscription: None,
        }
    }
}

impl MediaEngine for WebAudioEngine {
    fn attach(&mut self, sink: EventSink) {
        // A clip may already be loaded if a selection beat the shell's setup.
        if let Some((load_id, sink)) = self.sinks.attach(sink) {
            if let Some(audio) = &self.audio {
                self.subscription = Some(Subscription::new(audio, load_id, sink));
            }
        }
    }

    fn load(&mut self, src: &str, load_id: u64) {
        // Detach the previous clip's listeners before the element starts
        // firing for the new source.
        self.subscription = None;
        let sink = self.sinks.begin_load(load_id);
        let Some(audio) = &self.audio else {
            return;
        };
        audio.set_src(src);
        if let Some(sink) = sink {
            self.subscription = Some(Subscription::new(audio, load_id, sink));
        }
        audio.load();
    }

    fn play(&mut self) -> PlayConfirmation {
        let Some(audio) = &self.audio else {
            return ready(Err(PlaybackError::NoMediaElement)).boxed_local();
        };
        match audio.play() {
            Ok(promise) => async move {
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| PlaybackError::Rejected(js_error_message(&err)))
            }
            .boxed_local(),
            Err(err) => ready(Err(PlaybackError::Rejected(js_error_message(&err)))).boxed_local(),
        }
    }

    fn pause(&mut self) {
        if let Some(audio) = &self.audio {
            let _ = audio.pause();
        }
    }

    fn seek(&mut self, position: f64) {
        if let Some(audio) = &self.audio {
            audio.set_current_time(position);
        }
    }

    fn set_gain(&mut self, gain: f64) {
        if let Some(audio) = &self.audio {
            audio.set_volume(gain.clamp(0.0, 1.0));
        }
    }
}
