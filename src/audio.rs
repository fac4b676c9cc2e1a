//! Audio system for sound effect and music playback.
//!
//! Audio is strictly best-effort: a missing device or missing files never
//! stop the game. Each asset that fails to load is logged and skipped, and
//! every playback call on a disabled or incomplete system is a no-op.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Result};
use sdl2::mixer::{self, Chunk, InitFlag, Music, Sdl2MixerContext, AUDIO_S16LSB};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::debug;

use crate::error::AssetError;

const AUDIO_FREQUENCY: i32 = 44_100;
const AUDIO_CHANNELS: i32 = 4;
const AUDIO_CHUNK_SIZE: i32 = 1_024;

/// One-shot sound effects, mixed over the music.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Sfx {
    Collect,
    Lose,
}

impl Sfx {
    fn path(&self) -> &'static str {
        match self {
            Sfx::Collect => "assets/collect.wav",
            Sfx::Lose => "assets/lose.wav",
        }
    }
}

/// Looping background tracks. At most one plays at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Track {
    MenuTheme,
    GameTheme,
}

impl Track {
    fn path(&self) -> &'static str {
        match self {
            Track::MenuTheme => "assets/menu_bg.mp3",
            Track::GameTheme => "assets/game_bg.mp3",
        }
    }
}

/// Whether the audio device came up at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioState {
    Enabled,
    Disabled,
}

/// Handle to the mixer and every successfully loaded asset.
pub struct Audio {
    _mixer_context: Option<Sdl2MixerContext>,
    chunks: HashMap<Sfx, Chunk>,
    tracks: HashMap<Track, Music<'static>>,
    state: AudioState,
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio {
    /// Creates the audio system, disabling it if initialization fails or no
    /// asset loads at all.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Continuing without sound.", e);
                Self {
                    _mixer_context: None,
                    chunks: HashMap::new(),
                    tracks: HashMap::new(),
                    state: AudioState::Disabled,
                }
            }
        }
    }

    fn try_new() -> Result<Self> {
        mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, AUDIO_CHANNELS, AUDIO_CHUNK_SIZE)
            .map_err(|e| anyhow!("Failed to open audio: {}", e))?;

        mixer::allocate_channels(AUDIO_CHANNELS);

        // MP3 support is needed for the music tracks; the wav chunks load
        // without extra decoders
        let mixer_context = mixer::init(InitFlag::MP3).map_err(|e| anyhow!("Failed to initialize SDL2_mixer: {}", e))?;

        let chunks: HashMap<Sfx, Chunk> = Sfx::iter()
            .filter_map(|sfx| match Self::load_chunk(sfx) {
                Ok(chunk) => Some((sfx, chunk)),
                Err(e) => {
                    tracing::warn!("Failed to load sound effect {:?}: {}", sfx, e);
                    None
                }
            })
            .collect();

        let tracks: HashMap<Track, Music<'static>> = Track::iter()
            .filter_map(|track| match Self::load_track(track) {
                Ok(music) => Some((track, music)),
                Err(e) => {
                    tracing::warn!("Failed to load music track {:?}: {}", track, e);
                    None
                }
            })
            .collect();

        // If nothing loaded successfully, disable audio entirely
        if chunks.is_empty() && tracks.is_empty() {
            return Err(anyhow!("No audio assets loaded successfully"));
        }

        debug!(chunks = chunks.len(), tracks = tracks.len(), "Audio system initialized");

        Ok(Audio {
            _mixer_context: Some(mixer_context),
            chunks,
            tracks,
            state: AudioState::Enabled,
        })
    }

    fn load_chunk(sfx: Sfx) -> Result<Chunk, AssetError> {
        let path = sfx.path();
        if !Path::new(path).exists() {
            return Err(AssetError::NotFound(path.to_owned()));
        }

        Chunk::from_file(path).map_err(|reason| AssetError::LoadFailed {
            path: path.to_owned(),
            reason,
        })
    }

    fn load_track(track: Track) -> Result<Music<'static>, AssetError> {
        let path = track.path();
        if !Path::new(path).exists() {
            return Err(AssetError::NotFound(path.to_owned()));
        }

        Music::from_file(path).map_err(|reason| AssetError::LoadFailed {
            path: path.to_owned(),
            reason,
        })
    }

    /// Plays a sound effect once on the first free channel, if it loaded.
    pub fn play(&mut self, sfx: Sfx) {
        if self.state == AudioState::Disabled {
            return;
        }

        if let Some(chunk) = self.chunks.get(&sfx) {
            if let Err(e) = mixer::Channel::all().play(chunk, 0) {
                tracing::warn!("Could not play sound effect {:?}: {}", sfx, e);
            }
        }
    }

    /// Starts a music track looping forever, replacing whatever was playing.
    pub fn play_track(&mut self, track: Track) {
        if self.state == AudioState::Disabled {
            return;
        }

        if let Some(music) = self.tracks.get(&track) {
            if let Err(e) = music.play(-1) {
                tracing::warn!("Could not play music track {:?}: {}", track, e);
            }
        }
    }

    /// Halts whatever music is playing. Harmless when nothing is.
    pub fn stop_music(&mut self) {
        if self.state != AudioState::Disabled {
            Music::halt();
        }
    }

    /// True when the device never came up or no asset loaded; every
    /// playback call is then a no-op.
    pub fn is_disabled(&self) -> bool {
        self.state == AudioState::Disabled
    }
}
