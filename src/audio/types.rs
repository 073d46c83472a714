//! Audio-related small types and handles.
//!
//! This module defines the command enum understood by the audio thread and
//! the playback info snapshot it publishes.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tempfile::TempPath;

#[derive(Debug)]
pub enum AudioCmd {
    /// Start playing the downloaded media for the track at `index`.
    /// Ownership of the temp file moves to the audio thread, which keeps it
    /// on disk until the track is replaced or stopped.
    Play { index: usize, media: TempPath },
    /// Stop playback and drop the current media file.
    Stop,
    /// Toggle pause/resume.
    TogglePause,
    /// Quit the audio thread.
    Quit,
}

#[derive(Debug, Clone)]
/// Runtime playback information shared with the session and the reporter.
pub struct PlaybackInfo {
    /// Catalog index of the currently loaded track (if any).
    pub index: Option<usize>,
    /// Whether audio is actively coming out of the speakers.
    pub playing: bool,
    /// Whether a loaded track is paused. `playing` and `paused` are never
    /// both true.
    pub paused: bool,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            index: None,
            playing: false,
            paused: false,
            elapsed: Duration::ZERO,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
