use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::assets::SpriteBook;
use crate::constants::{MAX_SPEED, MIN_SPEED, SPAWN_OFFSET};
use crate::entities::{Roach, RoachKind, Swirl};
use crate::motion::Point;

/// Which side of the window a roach comes in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Creates roaches just outside the window, up to a population cap
pub struct Spawner {
    world_width: f32,
    world_height: f32,
    rng: StdRng,
}

impl Spawner {
    pub fn new(world_width: f32, world_height: f32, rng: StdRng) -> Self {
        Self {
            world_width,
            world_height,
            rng,
        }
    }

    pub fn seeded(world_width: f32, world_height: f32, seed: u64) -> Self {
        Self::new(world_width, world_height, StdRng::seed_from_u64(seed))
    }

    /// Make one roach heading for `target`, unless `active` has reached `cap`
    pub fn try_spawn(
        &mut self,
        active: usize,
        cap: usize,
        target: Point,
        sprites: &SpriteBook,
    ) -> Option<Roach> {
        if active >= cap {
            return None;
        }

        let kind = *RoachKind::ALL.choose(&mut self.rng)?;
        let speed = self.rng.random_range(MIN_SPEED..MAX_SPEED);
        let position = self.offscreen_position();
        let swirl = Swirl::random(&mut self.rng);

        log::debug!(
            "spawned {} roach at ({:.0}, {:.0}) speed {:.2}",
            kind.get_name(),
            position.x,
            position.y,
            speed
        );

        Some(Roach::new(
            kind,
            speed,
            position,
            target,
            sprites.for_kind(kind).clone(),
            swirl,
        ))
    }

    /// A random point [`SPAWN_OFFSET`] beyond one of the four edges
    pub fn offscreen_position(&mut self) -> Point {
        let edge = Edge::ALL[self.rng.random_range(0..Edge::ALL.len())];
        match edge {
            Edge::Top => Point::new(self.random_x(), -SPAWN_OFFSET),
            Edge::Bottom => Point::new(self.random_x(), self.world_height + SPAWN_OFFSET),
            Edge::Left => Point::new(-SPAWN_OFFSET, self.random_y()),
            Edge::Right => Point::new(self.world_width + SPAWN_OFFSET, self.random_y()),
        }
    }

    fn random_x(&mut self) -> f32 {
        self.rng.random_range(0.0..=self.world_width)
    }

    fn random_y(&mut self) -> f32 {
        self.rng.random_range(0.0..=self.world_height)
    }
}
