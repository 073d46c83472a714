//! Session model types: `Session` and `PlaybackState`.
//!
//! The `Session` struct is the explicit context passed through command
//! handling: the catalog, the current track and the locally tracked
//! playback state.

mod model;

pub use model::{InvalidIndex, PlaybackState, Session};
