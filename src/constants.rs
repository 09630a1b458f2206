//! Gameplay constants. Difficulty is fixed, so none of these are read from
//! the config file.

use std::time::Duration;

/// World size in game units. The terminal view is scaled to fit it.
pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

/// Every image is scaled by this factor when loaded
pub const IMAGE_SCALE: f32 = 0.15;

/// Cheese hit region is the visual rectangle shrunk by this much on each side
pub const CHEESE_HIT_MARGIN: f32 = 10.0;

pub const MAX_ROACHES: usize = 15;

/// How far beyond the window edge new roaches appear
pub const SPAWN_OFFSET: f32 = 50.0;

/// Roach base speed is drawn from [MIN_SPEED, MAX_SPEED)
pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 2.0;

pub const SWIRL_RADIUS: f32 = 3.0;
pub const SWIRL_STEP: f32 = 0.15;

pub const BIGBOY_HEALTH: u8 = 2;
pub const DEFAULT_HEALTH: u8 = 1;
pub const BIGBOY_SHRINK: f32 = 0.8;

/// How long a dead roach takes to fade out
pub const FADE_WINDOW: Duration = Duration::from_millis(1500);

/// Delay between frames (~33 fps)
pub const FRAME_DELAY: Duration = Duration::from_millis(30);

pub const SQUISH_SOUND_COUNT: usize = 6;
