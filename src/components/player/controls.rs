use crate::components::audio_manager::{toggle_mute, toggle_play_pause, TransportSignal};
use dioxus::prelude::*;

/// Play/Pause button - label follows the confirmed playback state
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let transport = use_context::<TransportSignal>();
    let view = transport.read().view();
    let has_clip = transport.read().session().current_clip.is_some();

    rsx! {
        button {
            id: "playPause",
            r#type: "button",
            class: if has_clip { "transport-btn" } else { "transport-btn idle" },
            onclick: move |_| toggle_play_pause(transport),
            "{view.play_label}"
        }
    }
}

/// Mute button
#[component]
pub(super) fn MuteButton() -> Element {
    let transport = use_context::<TransportSignal>();
    let view = transport.read().view();

    rsx! {
        button {
            id: "mute",
            r#type: "button",
            class: "transport-btn",
            onclick: move |_| toggle_mute(transport),
            "{view.mute_label}"
        }
    }
}
