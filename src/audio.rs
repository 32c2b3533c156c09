use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

/// The two sound cues the game plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Hit,
}

/// Holds the audio output stream and the decoded-validated cue buffers.
///
/// Everything is acquired up front so a missing device or a bad asset fails
/// startup instead of a round; the stream and buffers are released on drop.
pub struct AudioPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    eat: Vec<u8>,
    hit: Vec<u8>,
}

impl AudioPlayer {
    /// Open the default output device and load both cues from
    /// `<asset_dir>/audio/`.
    pub fn load(asset_dir: &Path) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("failed to open an audio output device")?;
        let eat = load_cue(&asset_dir.join("audio/eat.wav"))?;
        let hit = load_cue(&asset_dir.join("audio/hit.wav"))?;

        Ok(Self {
            _stream: stream,
            handle,
            eat,
            hit,
        })
    }

    /// Fire-and-forget playback. Playback hiccups are dropped; the cues are
    /// decoration, not state.
    pub fn play(&self, cue: Cue) {
        let bytes = match cue {
            Cue::Eat => self.eat.clone(),
            Cue::Hit => self.hit.clone(),
        };
        if let Ok(sink) = Sink::try_new(&self.handle) {
            if let Ok(source) = Decoder::new(Cursor::new(bytes)) {
                sink.append(source);
                sink.detach();
            }
        }
    }
}

fn load_cue(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read sound file {}", path.display()))?;
    Decoder::new(Cursor::new(bytes.clone()))
        .with_context(|| format!("failed to decode sound file {}", path.display()))?;
    Ok(bytes)
}
