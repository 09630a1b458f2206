// Library exports for testing
pub use app::App;
pub use assets::{RoachSprites, Sprite, SpriteBook};
pub use entities::{Cheese, GameState, Lifecycle, Roach, RoachKind, SpriteDraw, Swirl};
pub use error::{GameError, GameResult};
pub use motion::{Aabb, Point};
pub use session::Session;
pub use spawner::Spawner;

pub mod app;
pub mod assets;
pub mod audio;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod input;
pub mod logging;
pub mod motion;
pub mod renderer;
pub mod session;
pub mod spawner;
