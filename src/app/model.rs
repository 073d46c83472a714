use thiserror::Error;

use crate::audio::PlaybackInfo;
use crate::catalog::{Catalog, Track};

/// The playback state as the session tracks it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Idle
    }
}

/// A `play` argument that is not a number or not in the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid song number.")]
pub struct InvalidIndex;

/// The session context: catalog plus playback bookkeeping.
pub struct Session {
    pub catalog: Catalog,
    /// Catalog index of the track playback was last started on. Survives
    /// track end (so `next` keeps working) and is cleared only by `stop`.
    pub current: Option<usize>,
    pub playback: PlaybackState,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: None,
            playback: PlaybackState::Idle,
        }
    }

    /// Update the locally tracked playback state from the audio thread's
    /// published snapshot. Commands set the intended state eagerly; this
    /// catches track-end and failed-start transitions.
    pub fn reconcile(&mut self, info: &PlaybackInfo) {
        self.playback = if info.playing {
            PlaybackState::Playing
        } else if info.paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Idle
        };
    }

    pub fn set_current(&mut self, index: usize) {
        self.current = Some(index);
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.catalog.get(i))
    }

    /// Index of the track after the current one, wrapping at the end of the
    /// catalog. `None` when nothing was played yet.
    pub fn next_index(&self) -> Option<usize> {
        let current = self.current?;
        self.catalog.next_index(current)
    }

    /// Resolve a 1-based user argument to a catalog index.
    pub fn resolve_index(&self, arg: &str) -> Result<usize, InvalidIndex> {
        let n: usize = arg.trim().parse().map_err(|_| InvalidIndex)?;
        if n >= 1 && n <= self.catalog.len() {
            Ok(n - 1)
        } else {
            Err(InvalidIndex)
        }
    }
}
