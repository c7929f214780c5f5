use crate::catalog::Clip;
use crate::components::audio_manager::{select_clip, TransportSignal};
use dioxus::prelude::*;

/// One trigger button per catalog entry.
#[component]
pub fn Soundboard() -> Element {
    let transport = use_context::<TransportSignal>();
    // The catalog never changes; only the active clip needs to be tracked.
    let clips: Vec<Clip> = transport.peek().catalog().clips().cloned().collect();
    let active = transport
        .read()
        .session()
        .current_clip
        .as_ref()
        .map(|clip| clip.name.clone());

    rsx! {
        div { class: "sound-grid",
            for clip in clips {
                SoundButton {
                    key: "{clip.name}",
                    active: active.as_deref() == Some(clip.name.as_str()),
                    name: clip.name.clone(),
                    label: clip.label.clone(),
                }
            }
        }
    }
}

#[component]
fn SoundButton(name: String, label: String, active: bool) -> Element {
    let transport = use_context::<TransportSignal>();
    let on_click = {
        let name = name.clone();
        move |_| select_clip(transport, &name)
    };

    rsx! {
        button {
            r#type: "button",
            class: if active { "sound-btn active" } else { "sound-btn" },
            "data-sound": "{name}",
            onclick: on_click,
            "{label}"
        }
    }
}
