use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::Context;
use log::{debug, info, warn};

use crate::app::{PlaybackState, Session};
use crate::audio::{AudioCmd, AudioPlayer};
use crate::catalog::Catalog;
use crate::command::{self, Command};
use crate::config::Settings;
use crate::reporter;
use crate::youtube::YoutubeClient;

pub fn run() -> anyhow::Result<()> {
    let settings = super::settings::load_settings();

    let catalog_path = env::args()
        .nth(1)
        .unwrap_or_else(|| settings.catalog.path.clone());
    let catalog = Catalog::open(&catalog_path)
        .with_context(|| format!("loading catalog from {catalog_path}"))?;
    info!("loaded {} track(s) from {catalog_path}", catalog.len());

    let youtube = YoutubeClient::new(&settings.search).context("building the HTTP client")?;
    let player = AudioPlayer::new();

    let mut runtime = Runtime {
        session: Session::new(catalog),
        player,
        youtube,
        generation: Arc::new(AtomicU64::new(0)),
        settings,
    };

    println!("Welcome to vivace! Here are the available commands:");
    print!("{}", command::help_text());

    let stdin = io::stdin();
    loop {
        print!("{}", runtime.settings.ui.prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like `quit`.
            runtime.shutdown();
            break;
        }

        // Catch transitions the backend made on its own (track end,
        // failed start) before acting on the next command.
        let snapshot = runtime.player.snapshot();
        debug!(
            "backend: index={:?} playing={} paused={}",
            snapshot.index, snapshot.playing, snapshot.paused
        );
        runtime.session.reconcile(&snapshot);

        match Command::parse(&line) {
            Command::Quit => {
                runtime.shutdown();
                println!("Thank you for using vivace!");
                break;
            }
            Command::Empty => continue,
            cmd => {
                runtime.dispatch(cmd);
                print!("{}", command::help_text());
            }
        }
    }

    Ok(())
}

/// Everything a command handler may touch: the session context plus the
/// long-lived collaborators.
struct Runtime {
    session: Session,
    player: AudioPlayer,
    youtube: YoutubeClient,
    /// Playback session counter; see the reporter module.
    generation: Arc<AtomicU64>,
    settings: Settings,
}

impl Runtime {
    fn dispatch(&mut self, cmd: Command) {
        match cmd {
            Command::Search(query) => self.cmd_search(&query),
            Command::Pause => self.cmd_pause(),
            Command::Stop => self.cmd_stop(),
            Command::Next => self.cmd_next(),
            Command::List => self.cmd_list(),
            Command::Play(arg) => self.cmd_play(&arg),
            // The summary is reprinted after every command anyway.
            Command::Help => {}
            Command::Unknown(verb) => println!("Unknown command: {verb}"),
            // Handled by the loop before dispatch.
            Command::Quit | Command::Empty => {}
        }
    }

    fn cmd_search(&mut self, query: &str) {
        if query.is_empty() {
            println!("Usage: search <query>");
            return;
        }

        match self.youtube.search_first(query) {
            Ok(track) => {
                println!("Found and playing: {track}");
                let index = self.session.catalog.push(track);
                // Persist before playing: a track that fails to stream
                // still belongs to the catalog.
                if let Err(e) = self.session.catalog.save() {
                    println!("Couldn't save the catalog: {e}");
                }
                self.play_index(index);
            }
            Err(e) => println!("An error occurred: {e}"),
        }
    }

    fn cmd_play(&mut self, arg: &str) {
        match self.session.resolve_index(arg) {
            Ok(index) => self.play_index(index),
            Err(e) => println!("{e}"),
        }
    }

    fn play_index(&mut self, index: usize) {
        let Some(track) = self.session.catalog.get(index).cloned() else {
            println!("Invalid song number.");
            return;
        };

        let media = match self.youtube.download_audio(&track.youtube_id) {
            Ok(media) => media,
            Err(e) => {
                println!("An error occurred: {e}");
                return;
            }
        };

        if self.player.send(AudioCmd::Play { index, media }).is_err() {
            warn!("audio thread is gone; cannot play");
            return;
        }
        self.session.set_current(index);
        self.session.playback = PlaybackState::Playing;

        // Each play starts a new playback session; the previous reporter
        // observes the bump and exits at its next tick. Reporters are
        // detached, never joined.
        let session_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = reporter::spawn(
            track,
            self.player.playback_handle(),
            self.generation.clone(),
            session_generation,
            self.youtube.http(),
            self.settings.artwork.clone(),
            Duration::from_millis(self.settings.ui.refresh_ms),
        );
    }

    fn cmd_pause(&mut self) {
        let _ = self.player.send(AudioCmd::TogglePause);
        // Eager flip; reconciliation before the next command corrects any
        // drift (e.g. toggling with nothing loaded).
        self.session.playback = match self.session.playback {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused | PlaybackState::Idle => PlaybackState::Playing,
        };
    }

    fn cmd_stop(&mut self) {
        if let Some(track) = self.session.current_track() {
            debug!("stopping \"{track}\"");
        }
        let _ = self.player.send(AudioCmd::Stop);
        self.session.clear_current();
        self.session.playback = PlaybackState::Idle;
        // Retire the reporter even before the backend publishes the stop.
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn cmd_next(&mut self) {
        match self.session.next_index() {
            Some(next) => self.play_index(next),
            None => debug!("next with no current track; ignoring"),
        }
    }

    fn cmd_list(&self) {
        for (i, track) in self.session.catalog.iter().enumerate() {
            println!("{}. {track}", i + 1);
        }
    }

    fn shutdown(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.player.quit();
    }
}
