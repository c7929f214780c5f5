//! The components module contains all shared components for our app.

mod app;
pub mod audio_manager;
mod player;
mod soundboard;

pub use app::*;
pub use player::*;
pub use soundboard::*;
