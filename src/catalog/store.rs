use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::model::Track;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file error: {0}")]
    Io(#[from] io::Error),

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The ordered, persisted collection of tracks.
///
/// Insertion order is meaningful: it drives the numbered listing and the
/// `next` wraparound. The whole file is rewritten on every save.
pub struct Catalog {
    tracks: Vec<Track>,
    path: PathBuf,
}

impl Catalog {
    /// Read the catalog persisted at `path`. An absent file is an empty
    /// catalog, not an error; a file that exists but does not parse is.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let tracks = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { tracks, path })
    }

    /// Overwrite the persisted file with the full current catalog.
    pub fn save(&self) -> Result<(), CatalogError> {
        let text = serde_json::to_string(&self.tracks)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Append a track and return its index. Persisting is a separate step so
    /// a failed save never loses the in-memory record.
    pub fn push(&mut self, track: Track) -> usize {
        self.tracks.push(track);
        self.tracks.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Index of the track after `current`, wrapping to the first track.
    pub fn next_index(&self, current: usize) -> Option<usize> {
        if self.tracks.is_empty() {
            None
        } else {
            Some((current + 1) % self.tracks.len())
        }
    }
}
