//! Utilities for creating `rodio` sinks from downloaded media files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use rodio::{Decoder, OutputStream, Sink};

/// Create a paused `Sink` for the media file at `path`.
pub(super) fn create_sink(handle: &OutputStream, path: &Path) -> anyhow::Result<Sink> {
    let file =
        File::open(path).with_context(|| format!("opening media file {}", path.display()))?;

    let source = Decoder::new(BufReader::new(file))
        .with_context(|| format!("decoding media file {}", path.display()))?;

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
