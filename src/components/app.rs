use crate::catalog::SoundCatalog;
use crate::components::audio_manager::{
    EventSink, MediaEvent, PlatformEngine, Transport, TransportSignal,
};
use crate::components::{Player, Soundboard};
use crate::settings::SoundboardSettings;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn AppShell() -> Element {
    let transport: TransportSignal = use_signal(|| {
        let settings = SoundboardSettings::load();
        let catalog = SoundCatalog::from_entries(&settings.clips);
        Transport::new(catalog, PlatformEngine::new(), settings.initial_volume)
    });

    use_context_provider(|| transport);

    // Route engine notifications back into the transport. They arrive from DOM
    // listeners, outside any component scope.
    use_effect(move || {
        let runtime = Runtime::current();
        let sink: EventSink = Rc::new(move |load_id: u64, event: MediaEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let mut transport = transport;
            transport.write().on_media_event(load_id, event);
        });
        let mut transport = transport;
        transport.write().attach_events(sink);
    });

    rsx! {
        main { class: "soundboard-shell",
            header { class: "soundboard-header",
                h1 { "Soundboard" }
            }
            Soundboard {}
            Player {}
        }
    }
}
