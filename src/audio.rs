//! The playback backend: a background audio thread driven over a command
//! channel, publishing its state through a shared handle.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::{AudioCmd, PlaybackHandle, PlaybackInfo};
