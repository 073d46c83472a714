use std::fmt;

use serde::{Deserialize, Serialize};

/// One playable song record. The serde field names are exactly the keys of
/// the persisted catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub youtube_id: String,
    /// Older catalog files may lack this key entirely.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}
