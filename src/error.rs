//! Error types for startup and the terminal services.
//!
//! Everything that can go wrong inside the simulation itself (clicking empty
//! space, zero-length vectors, an empty roach list) is an ordinary outcome and
//! never reaches this module. What is left is fatal: the binary reports it and
//! exits non-zero.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// An image is missing or could not be decoded.
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    /// A sound file could not be opened.
    SoundOpen { path: PathBuf, source: io::Error },

    /// A sound file was opened but is not a format rodio can decode.
    SoundDecode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },

    /// The config file exists but could not be read.
    ConfigRead { path: PathBuf, source: io::Error },

    /// The config file is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The terminal event system failed.
    Input(io::Error),
}

impl GameError {
    /// True for the missing/corrupt asset family of errors
    pub fn is_asset_failure(&self) -> bool {
        matches!(
            self,
            GameError::Image { .. } | GameError::SoundOpen { .. } | GameError::SoundDecode { .. }
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Image { path, .. } => {
                write!(f, "failed to load image '{}'", path.display())
            }
            GameError::SoundOpen { path, .. } => {
                write!(f, "failed to open sound '{}'", path.display())
            }
            GameError::SoundDecode { path, .. } => {
                write!(f, "failed to decode sound '{}'", path.display())
            }
            GameError::ConfigRead { path, .. } => {
                write!(f, "failed to read config '{}'", path.display())
            }
            GameError::ConfigParse { path, .. } => {
                write!(f, "invalid config '{}'", path.display())
            }
            GameError::Input(_) => write!(f, "terminal input unavailable"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Image { source, .. } => Some(source),
            GameError::SoundOpen { source, .. } => Some(source),
            GameError::SoundDecode { source, .. } => Some(source),
            GameError::ConfigRead { source, .. } => Some(source),
            GameError::ConfigParse { source, .. } => Some(source),
            GameError::Input(source) => Some(source),
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Input(err)
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
