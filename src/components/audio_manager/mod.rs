//! Audio Manager - owns the single playback session and the media engine behind it.
//! UI components only reach the engine through the transport held in [`TransportSignal`].

use dioxus::prelude::*;

mod engine;
mod playback_api;
mod session;
mod transport;

#[cfg(not(target_arch = "wasm32"))]
mod detached_engine;
#[cfg(any(target_arch = "wasm32", test))]
mod sink_slot;
#[cfg(target_arch = "wasm32")]
mod web_engine;

pub use engine::{EventSink, MediaEvent};
pub use playback_api::{seek_fraction, select_clip, set_volume, toggle_mute, toggle_play_pause};
pub use transport::{PendingPlay, Transport};

#[cfg(not(target_arch = "wasm32"))]
pub use detached_engine::DetachedEngine;
#[cfg(target_arch = "wasm32")]
pub use web_engine::WebAudioEngine;

#[cfg(target_arch = "wasm32")]
pub type PlatformEngine = WebAudioEngine;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformEngine = DetachedEngine;

/// The page's one transport, provided as context by the app shell.
pub type TransportSignal = Signal<Transport<PlatformEngine>>;
