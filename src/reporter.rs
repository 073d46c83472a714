//! The now-playing reporter: a background loop that redraws the terminal
//! while a track is playing.
//!
//! Each playback session spawns exactly one reporter and bumps a shared
//! generation counter. A reporter keeps rendering only while it owns the
//! live generation, so starting the next track (or stopping) retires the
//! previous loop at its next tick instead of leaving it racing on the
//! terminal.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use log::debug;

use crate::artwork;
use crate::audio::{PlaybackHandle, PlaybackInfo};
use crate::catalog::Track;
use crate::config::ArtworkSettings;

const FOOTER: &str = "\nPress 'p' to pause/resume, 'x' to stop, 'n' for next song";

pub fn spawn(
    track: Track,
    playback: PlaybackHandle,
    generation: Arc<AtomicU64>,
    session: u64,
    http: reqwest::blocking::Client,
    artwork_settings: ArtworkSettings,
    refresh: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        // Fetched and rendered once per session, reprinted every frame.
        let mut art: Option<String> = None;

        loop {
            let snapshot = playback
                .lock()
                .map(|info| info.clone())
                .unwrap_or_default();

            if !should_render(&snapshot, generation.load(Ordering::SeqCst), session) {
                debug!("reporter for \"{track}\" exiting");
                break;
            }

            if art.is_none() {
                art = Some(load_art(&http, &track, &artwork_settings));
            }

            draw(&track, &snapshot, art.as_deref().unwrap_or(""));
            thread::sleep(refresh);
        }
    })
}

/// A reporter keeps rendering only while it owns the live playback session
/// and the backend still reports playing. Pausing, stopping and track end
/// all clear `playing`; a newer `play` moves the generation on.
fn should_render(info: &PlaybackInfo, live_generation: u64, session: u64) -> bool {
    live_generation == session && info.playing
}

fn load_art(
    http: &reqwest::blocking::Client,
    track: &Track,
    settings: &ArtworkSettings,
) -> String {
    if !settings.enabled {
        return String::new();
    }
    match &track.thumbnail_url {
        None => String::new(),
        Some(url) => match artwork::fetch(http, url) {
            Ok(img) => artwork::render(&img, settings.columns, settings.width_ratio),
            Err(e) => format!("Couldn't display album art: {e}\n"),
        },
    }
}

fn draw(track: &Track, info: &PlaybackInfo, art: &str) {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0));
    let _ = writeln!(stdout, "Now playing: {track} [{}]", format_elapsed(info.elapsed));
    let _ = write!(stdout, "{art}");
    let _ = writeln!(stdout, "{FOOTER}");
    let _ = stdout.flush();
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
