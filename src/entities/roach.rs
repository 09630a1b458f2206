use rand::Rng;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use crate::assets::{RoachSprites, Sprite};
use crate::constants::{BIGBOY_HEALTH, BIGBOY_SHRINK, DEFAULT_HEALTH, FADE_WINDOW};
use crate::motion::{self, Aabb, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoachKind {
    Normal,
    BigBoy,
    Tipsy,
    Fast,
}

/// How a roach gets to the cheese
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionRule {
    Straight,
    Swirl,
}

impl RoachKind {
    pub const ALL: [RoachKind; 4] = [
        RoachKind::Normal,
        RoachKind::BigBoy,
        RoachKind::Tipsy,
        RoachKind::Fast,
    ];

    pub fn speed_multiplier(&self) -> f32 {
        match self {
            RoachKind::Normal => 1.0,
            RoachKind::BigBoy => 0.5,
            RoachKind::Tipsy => 1.0,
            RoachKind::Fast => 2.0,
        }
    }

    pub fn motion(&self) -> MotionRule {
        match self {
            RoachKind::Tipsy => MotionRule::Swirl,
            _ => MotionRule::Straight,
        }
    }

    pub fn starting_health(&self) -> u8 {
        match self {
            RoachKind::BigBoy => BIGBOY_HEALTH,
            _ => DEFAULT_HEALTH,
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            RoachKind::Normal => "normal",
            RoachKind::BigBoy => "bigboy",
            RoachKind::Tipsy => "tipsy",
            RoachKind::Fast => "fast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lifecycle {
    Alive,
    Dying { died_at: Instant },
    Removed,
}

/// Swirl state. Every roach gets one, only Tipsy uses it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swirl {
    pub phase: f32,
    pub clockwise: bool,
}

impl Swirl {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            phase: rng.random_range(0.0..TAU),
            clockwise: rng.random_bool(0.5),
        }
    }
}

impl Default for Swirl {
    fn default() -> Self {
        Self {
            phase: 0.0,
            clockwise: true,
        }
    }
}

/// One frame's worth of drawing for a roach
#[derive(Debug, Clone)]
pub struct SpriteDraw {
    pub sprite: Sprite,
    pub center: Point,
    /// Clockwise on screen, 0 = facing +x
    pub rotation_deg: f32,
    pub alpha: u8,
}

#[derive(Debug, Clone)]
pub struct Roach {
    pub kind: RoachKind,
    pub speed: f32,
    pub health: u8,
    pub position: Point,
    pub target: Point,
    /// Last heading toward the target, in degrees
    pub heading: f32,
    pub swirl: Swirl,
    pub lifecycle: Lifecycle,
    sprites: RoachSprites,
    shrunk: bool,
}

impl Roach {
    pub fn new(
        kind: RoachKind,
        speed: f32,
        position: Point,
        target: Point,
        sprites: RoachSprites,
        swirl: Swirl,
    ) -> Self {
        Self {
            kind,
            speed,
            health: kind.starting_health(),
            position,
            target,
            heading: motion::heading_degrees(position, target),
            swirl,
            lifecycle: Lifecycle::Alive,
            sprites,
            shrunk: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lifecycle == Lifecycle::Alive
    }

    pub fn is_removed(&self) -> bool {
        self.lifecycle == Lifecycle::Removed
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprites.alive
    }

    /// The unrotated sprite rectangle centered on the roach
    pub fn bounds(&self) -> Aabb {
        let sprite = self.sprite();
        Aabb::centered(self.position, sprite.width(), sprite.height())
    }

    /// Take one step toward the target. Dead roaches stay put.
    pub fn advance(&mut self) {
        if !self.is_alive() {
            return;
        }

        let speed = self.speed * self.kind.speed_multiplier();
        self.position = match self.kind.motion() {
            MotionRule::Straight => motion::step_toward(self.position, self.target, speed),
            MotionRule::Swirl => {
                let next =
                    motion::step_swirl(self.position, self.target, speed, self.swirl.phase);
                self.swirl.phase = motion::advance_phase(self.swirl.phase, self.swirl.clockwise);
                next
            }
        };
    }

    /// Apply a click at `point`. Returns true only when this click killed the
    /// roach; the caller plays the squish.
    pub fn register_hit(&mut self, point: Point, now: Instant) -> bool {
        if !self.is_alive() || !self.bounds().contains(point) {
            return false;
        }

        self.health = self.health.saturating_sub(1);

        if self.kind == RoachKind::BigBoy && self.health == 1 && !self.shrunk {
            self.sprites.alive = self.sprites.alive.scaled(BIGBOY_SHRINK);
            self.shrunk = true;
        }

        if self.health == 0 {
            self.lifecycle = Lifecycle::Dying { died_at: now };
            return true;
        }
        false
    }

    /// What to draw this frame. A fully faded roach becomes `Removed` and
    /// draws nothing.
    pub fn render_state(&mut self, now: Instant) -> Option<SpriteDraw> {
        match self.lifecycle {
            Lifecycle::Alive => {
                self.heading = motion::heading_degrees(self.position, self.target);
                Some(SpriteDraw {
                    sprite: self.sprites.alive.clone(),
                    center: self.position,
                    rotation_deg: self.heading,
                    alpha: u8::MAX,
                })
            }
            Lifecycle::Dying { died_at } => {
                let elapsed = now.saturating_duration_since(died_at);
                if elapsed >= FADE_WINDOW {
                    self.lifecycle = Lifecycle::Removed;
                    return None;
                }
                let progress = fade_progress(elapsed);
                Some(SpriteDraw {
                    sprite: self.sprites.dead.clone(),
                    center: self.position,
                    rotation_deg: self.heading,
                    alpha: (255.0 * (1.0 - progress)) as u8,
                })
            }
            Lifecycle::Removed => None,
        }
    }
}

/// 0.0 at death, approaching 1.0 at the end of the fade window.
/// Only drives alpha; removal compares durations.
fn fade_progress(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() / FADE_WINDOW.as_secs_f32()).min(1.0)
}
