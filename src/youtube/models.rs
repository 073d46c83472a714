//! Wire models for the Invidious JSON API.
//!
//! Only the fields the player actually reads are modeled; everything else in
//! the responses is ignored.

use serde::Deserialize;

/// One entry of `/api/v1/search?type=video`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVideo {
    pub title: String,
    pub video_id: String,
    pub author: String,
    #[serde(default)]
    pub video_thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: u32,
}

impl SearchVideo {
    /// The widest thumbnail on offer, if any.
    pub fn best_thumbnail(&self) -> Option<&str> {
        self.video_thumbnails
            .iter()
            .max_by_key(|t| t.width)
            .map(|t| t.url.as_str())
    }
}

/// The subset of `/api/v1/videos/{id}` we need to pick an audio stream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStreams {
    #[serde(default)]
    pub adaptive_formats: Vec<AdaptiveFormat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdaptiveFormat {
    pub url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    /// The API documents this as a stringified integer, but some instances
    /// serialize it as a bare number.
    #[serde(default)]
    pub bitrate: Option<serde_json::Value>,
}

impl AdaptiveFormat {
    /// Whether this format is audio in a container our decoder is built for.
    pub fn is_playable_audio(&self) -> bool {
        self.mime_type.starts_with("audio/mp4")
    }

    pub fn bitrate_value(&self) -> u64 {
        match &self.bitrate {
            Some(serde_json::Value::String(s)) => s.parse().unwrap_or(0),
            Some(serde_json::Value::Number(n)) => n.as_u64().unwrap_or(0),
            _ => 0,
        }
    }
}

/// The highest-bitrate playable audio format, if the video has one.
pub fn pick_audio_format(formats: &[AdaptiveFormat]) -> Option<&AdaptiveFormat> {
    formats
        .iter()
        .filter(|f| f.is_playable_audio())
        .max_by_key(|f| f.bitrate_value())
}
