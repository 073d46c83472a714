use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, warn};
use rodio::{OutputStreamBuilder, Sink};
use tempfile::TempPath;

use super::sink::create_sink;
use super::types::{AudioCmd, PlaybackHandle};

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a terminal app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let mut sink: Option<Sink> = None;
        // Never read, only held: the downloaded media file stays on disk
        // exactly as long as the sink that reads from it.
        let mut _media: Option<TempPath> = None;
        let mut paused = false;

        // Track start time and accumulated elapsed when paused.
        let mut started_at: Option<Instant> = None;
        let mut accumulated = Duration::ZERO;

        fn publish_idle(playback_info: &PlaybackHandle) {
            if let Ok(mut info) = playback_info.lock() {
                info.index = None;
                info.playing = false;
                info.paused = false;
                info.elapsed = Duration::ZERO;
            }
        }

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    AudioCmd::Play { index, media: new_media } => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }

                        match create_sink(&stream, &new_media) {
                            Ok(new_sink) => {
                                new_sink.play();
                                sink = Some(new_sink);
                                _media = Some(new_media);
                                paused = false;
                                started_at = Some(Instant::now());
                                accumulated = Duration::ZERO;

                                if let Ok(mut info) = playback_info.lock() {
                                    info.index = Some(index);
                                    info.playing = true;
                                    info.paused = false;
                                    info.elapsed = Duration::ZERO;
                                }
                            }
                            Err(e) => {
                                warn!("failed to start playback: {e:#}");
                                _media = None;
                                started_at = None;
                                accumulated = Duration::ZERO;
                                publish_idle(&playback_info);
                            }
                        }
                    }

                    AudioCmd::Stop => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        _media = None;
                        paused = false;
                        started_at = None;
                        accumulated = Duration::ZERO;
                        publish_idle(&playback_info);
                    }

                    AudioCmd::TogglePause => {
                        if let Some(ref s) = sink {
                            if paused {
                                s.play();
                            } else {
                                s.pause();
                            }
                            if paused {
                                // unpausing
                                started_at = Some(Instant::now());
                                if let Ok(mut info) = playback_info.lock() {
                                    info.playing = true;
                                    info.paused = false;
                                }
                            } else {
                                // pausing
                                if let Some(st) = started_at {
                                    accumulated += Instant::now() - st;
                                }
                                started_at = None;
                                if let Ok(mut info) = playback_info.lock() {
                                    info.playing = false;
                                    info.paused = true;
                                }
                            }
                            paused = !paused;
                        }
                    }

                    AudioCmd::Quit => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        publish_idle(&playback_info);
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // Periodic check: did the current track run out?
                    let drained = sink
                        .as_ref()
                        .map(|s| !paused && s.empty())
                        .unwrap_or(false);

                    if drained {
                        debug!("track finished, returning to idle");
                        sink = None;
                        _media = None;
                        paused = false;
                        started_at = None;
                        accumulated = Duration::ZERO;
                        publish_idle(&playback_info);
                    } else if sink.is_some() {
                        if let Some(st) = started_at {
                            if let Ok(mut info) = playback_info.lock() {
                                info.elapsed = accumulated + st.elapsed();
                            }
                        }
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
