use rand::seq::IndexedRandom;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::constants::SQUISH_SOUND_COUNT;
use crate::error::{GameError, GameResult};

/// A decoded sound that can be played any number of times
pub type SoundHandle = Buffered<Decoder<BufReader<File>>>;

/// Open and decode a sound file
pub fn load_sound(path: &Path) -> GameResult<SoundHandle> {
    let file = File::open(path).map_err(|source| GameError::SoundOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| GameError::SoundDecode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {}", path.display());
    Ok(decoder.buffered())
}

/// Every sound the game plays
pub struct SoundBank {
    pub music: SoundHandle,
    pub squishes: Vec<SoundHandle>,
}

impl SoundBank {
    /// Load `sounds/music.mp3` and `sounds/squish1.mp3`..`squish6.mp3`
    pub fn load(assets_dir: &Path) -> GameResult<Self> {
        let sounds = assets_dir.join("sounds");
        let music = load_sound(&sounds.join("music.mp3"))?;
        let squishes = (1..=SQUISH_SOUND_COUNT)
            .map(|i| load_sound(&sounds.join(format!("squish{i}.mp3"))))
            .collect::<GameResult<Vec<_>>>()?;
        log::info!("loaded {} sounds from {}", squishes.len() + 1, sounds.display());
        Ok(Self { music, squishes })
    }
}

/// Plays the music loop and the squish effects
pub struct AudioManager {
    /// None when no output device could be opened
    output: Option<(OutputStream, OutputStreamHandle)>,
    sounds: Option<SoundBank>,
    music_sink: Option<Sink>,
    music_volume: f32,
    squish_volume: f32,
}

impl AudioManager {
    /// Open the default output device. Without one the game stays silent.
    pub fn new(sounds: SoundBank, music_volume: f32, squish_volume: f32) -> Self {
        let output = match OutputStream::try_default() {
            Ok(output) => Some(output),
            Err(err) => {
                log::warn!("no audio output, continuing without sound: {err}");
                None
            }
        };

        Self {
            output,
            sounds: Some(sounds),
            music_sink: None,
            music_volume,
            squish_volume,
        }
    }

    /// No device and no sounds. Every playback call is a no-op.
    pub fn silent() -> Self {
        Self {
            output: None,
            sounds: None,
            music_sink: None,
            music_volume: 0.0,
            squish_volume: 0.0,
        }
    }

    fn handle(&self) -> Option<&OutputStreamHandle> {
        self.output.as_ref().map(|(_, handle)| handle)
    }

    /// Fire-and-forget playback of one sound
    pub fn play_sound(&self, sound: &SoundHandle, volume: f32) {
        let Some(handle) = self.handle() else {
            return;
        };
        // Playback errors are not worth stopping the game for
        match Sink::try_new(handle) {
            Ok(sink) => {
                sink.set_volume(volume);
                sink.append(sound.clone());
                sink.detach();
            }
            Err(err) => log::warn!("could not play sound: {err}"),
        }
    }

    /// Play one of the squish sounds, picked at random
    pub fn play_squish(&self) {
        let squishes = self.sounds.as_ref().map_or(&[][..], |s| &s.squishes[..]);
        if let Some(squish) = squishes.choose(&mut rand::rng()) {
            self.play_sound(squish, self.squish_volume);
        }
    }

    /// Start the background music from the beginning, looping forever
    pub fn play_music_loop(&mut self) {
        self.stop_music();
        let (Some(handle), Some(sounds)) = (self.handle(), self.sounds.as_ref()) else {
            return;
        };
        match Sink::try_new(handle) {
            Ok(sink) => {
                sink.set_volume(self.music_volume);
                sink.append(sounds.music.clone().repeat_infinite());
                self.music_sink = Some(sink);
            }
            Err(err) => log::warn!("could not start music: {err}"),
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(sink) = self.music_sink.take() {
            sink.stop();
        }
    }
}
