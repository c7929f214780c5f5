// Public playback utility API consumed by UI components.
use super::{PendingPlay, TransportSignal};
use dioxus::prelude::*;

/// Await a play confirmation off the event handler and report it back.
fn settle_in_background(mut transport: TransportSignal, pending: Option<PendingPlay>) {
    let Some(PendingPlay {
        ticket,
        confirmation,
    }) = pending
    else {
        return;
    };
    spawn(async move {
        let result = confirmation.await;
        transport.write().settle_play(ticket, result);
    });
}

/// Load and start the catalog clip `name`. Unknown names are ignored.
pub fn select_clip(mut transport: TransportSignal, name: &str) {
    let pending = transport.write().select_clip(name);
    settle_in_background(transport, pending);
}

pub fn toggle_play_pause(mut transport: TransportSignal) {
    let pending = transport.write().toggle_play_pause();
    settle_in_background(transport, pending);
}

/// Seek to a fraction of the current clip.
pub fn seek_fraction(mut transport: TransportSignal, fraction: f64) {
    transport.write().seek(fraction);
}

pub fn set_volume(mut transport: TransportSignal, level: f64) {
    transport.write().set_volume(level);
}

pub fn toggle_mute(mut transport: TransportSignal) {
    transport.write().toggle_mute();
}
