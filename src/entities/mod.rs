mod cheese;
mod game_state;
mod roach;

// Re-export all public types
pub use cheese::Cheese;
pub use game_state::GameState;
pub use roach::{Lifecycle, MotionRule, Roach, RoachKind, SpriteDraw, Swirl};
