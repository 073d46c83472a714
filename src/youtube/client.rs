use std::io;
use std::time::Duration;

use log::debug;
use tempfile::TempPath;
use thiserror::Error;

use crate::catalog::Track;
use crate::config::SearchSettings;

use super::models::{SearchVideo, VideoStreams, pick_audio_format};

/// Downloads are bounded separately from API calls; an audio stream can
/// take far longer than the metadata round trips.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no results for \"{0}\"")]
    NoResults(String),

    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("no playable audio stream for video {0}")]
    NoAudioStream(String),

    #[error("stream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("writing stream to disk failed: {0}")]
    Io(#[from] io::Error),
}

/// Blocking client for one Invidious-compatible instance.
pub struct YoutubeClient {
    http: reqwest::blocking::Client,
    instance: String,
}

impl YoutubeClient {
    pub fn new(settings: &SearchSettings) -> Result<Self, reqwest::Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            instance: settings.instance.trim_end_matches('/').to_string(),
        })
    }

    /// A handle to the underlying HTTP client, for callers that fetch
    /// auxiliary resources (thumbnails) themselves.
    pub fn http(&self) -> reqwest::blocking::Client {
        self.http.clone()
    }

    /// Search the platform and map the first video result to a `Track`.
    pub fn search_first(&self, query: &str) -> Result<Track, SearchError> {
        let url = format!("{}/api/v1/search", self.instance);
        let results: Vec<SearchVideo> = self
            .http
            .get(&url)
            .query(&[("q", query), ("type", "video")])
            .send()?
            .error_for_status()?
            .json()?;
        debug!("search \"{query}\": {} result(s)", results.len());

        let hit = results
            .into_iter()
            .next()
            .ok_or_else(|| SearchError::NoResults(query.to_string()))?;

        let thumbnail_url = hit.best_thumbnail().map(str::to_string);
        Ok(Track {
            title: hit.title,
            artist: hit.author,
            youtube_id: hit.video_id,
            thumbnail_url,
        })
    }

    /// Resolve the direct URL of the best audio stream for `video_id`.
    pub fn audio_stream_url(&self, video_id: &str) -> Result<String, StreamError> {
        let url = format!("{}/api/v1/videos/{}", self.instance, video_id);
        let video: VideoStreams = self
            .http
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;

        pick_audio_format(&video.adaptive_formats)
            .map(|f| f.url.clone())
            .ok_or_else(|| StreamError::NoAudioStream(video_id.to_string()))
    }

    /// Download the audio stream for `video_id` into a temp file. The
    /// returned path owns the file: it is deleted when dropped, so the
    /// caller keeps it alive for as long as playback needs it.
    pub fn download_audio(&self, video_id: &str) -> Result<TempPath, StreamError> {
        let url = self.audio_stream_url(video_id)?;

        let mut response = self
            .http
            .get(&url)
            .timeout(DOWNLOAD_TIMEOUT)
            .send()?
            .error_for_status()?;

        let mut file = tempfile::Builder::new()
            .prefix("vivace-")
            .suffix(".m4a")
            .tempfile()?;
        let bytes = io::copy(&mut response, &mut file)?;
        debug!("downloaded {bytes} bytes for video {video_id}");

        Ok(file.into_temp_path())
    }
}
