//! Runtime settings loaded from `cheese_defender.toml`.
//!
//! Every key is optional; anything missing falls back to [`GameConfig::default`].
//! A missing file is the same as an empty one. Gameplay numbers live in
//! [`crate::constants`] and are not configurable.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{GameError, GameResult};

pub const CONFIG_FILE: &str = "cheese_defender.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Directory containing `pics/` and `sounds/`
    pub assets_dir: PathBuf,
    pub music_volume: f32,
    pub squish_volume: f32,
    pub log_file: PathBuf,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("."),
            music_volume: 0.3,
            squish_volume: 1.0,
            log_file: PathBuf::from("debug.log"),
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Load from `path`, or return defaults if the file does not exist
    pub fn load(path: &Path) -> GameResult<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).map_err(|source| GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(GameError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
