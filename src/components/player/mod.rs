use crate::components::audio_manager::{seek_fraction, set_volume, TransportSignal};
use crate::utils::click_fraction;
use dioxus::prelude::*;
use std::rc::Rc;

mod controls;

use controls::{MuteButton, PlayPauseButton};

#[component]
pub fn Player() -> Element {
    let transport = use_context::<TransportSignal>();
    let mut track = use_signal(|| None::<Rc<MountedData>>);

    let view = transport.read().view();
    let volume = transport.read().session().volume;
    let fill_width = format!("width: {:.2}%;", view.progress_percent());

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(level) = e.value().parse::<f64>() {
            set_volume(transport, level);
        }
    };

    // The track only reports its rect asynchronously, so the seek lands
    // once it comes back. Both x values are viewport coordinates.
    let on_track_click = move |e: MouseEvent| {
        let client_x = e.client_coordinates().x;
        let Some(mounted) = track() else {
            return;
        };
        spawn(async move {
            if let Ok(rect) = mounted.get_client_rect().await {
                if let Some(fraction) = click_fraction(client_x, rect.origin.x, rect.width()) {
                    seek_fraction(transport, fraction);
                }
            }
        });
    };

    rsx! {
        div { class: "player",
            div { class: "player-controls",
                PlayPauseButton {}
                MuteButton {}
                input {
                    id: "volume",
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: "{volume}",
                    class: "volume-slider",
                    oninput: on_volume_change,
                }
            }
            div {
                class: "progress-bar",
                onmounted: move |e: MountedEvent| track.set(Some(e.data())),
                onclick: on_track_click,
                div { class: "progress-fill", style: "{fill_width}" }
            }
            span { class: "time-display", "{view.time_text}" }
        }
    }
}
