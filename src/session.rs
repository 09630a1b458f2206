use std::time::Instant;

use crate::assets::SpriteBook;
use crate::constants::{MAX_ROACHES, WORLD_HEIGHT, WORLD_WIDTH};
use crate::entities::{Cheese, Roach, SpriteDraw};
use crate::motion::Point;
use crate::spawner::Spawner;

/// Everything that belongs to one round: score, clock, roaches, the cheese.
/// A restart throws the whole thing away and builds a new one.
pub struct Session {
    score: u32,
    started_at: Instant,
    roaches: Vec<Roach>,
    over: bool,
    cheese: Cheese,
    spawner: Spawner,
    sprites: SpriteBook,
}

impl Session {
    pub fn new(sprites: SpriteBook, spawner: Spawner, now: Instant) -> Self {
        let cheese = Cheese::centered(sprites.cheese.clone(), WORLD_WIDTH, WORLD_HEIGHT);
        Self {
            score: 0,
            started_at: now,
            roaches: Vec::new(),
            over: false,
            cheese,
            spawner,
            sprites,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whole seconds since the round began
    pub fn elapsed_secs(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.started_at).as_secs()
    }

    /// True once a live roach has reached the cheese
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn cheese(&self) -> &Cheese {
        &self.cheese
    }

    pub fn roaches(&self) -> &[Roach] {
        &self.roaches
    }

    /// Put a roach into play directly, bypassing the spawner
    pub fn add_roach(&mut self, roach: Roach) {
        self.roaches.push(roach);
    }

    /// Hit-test a click against every roach. Each roach whose box holds the
    /// point takes the hit. Returns how many died.
    pub fn click(&mut self, point: Point, now: Instant) -> u32 {
        let mut kills = 0;
        for roach in &mut self.roaches {
            if roach.register_hit(point, now) {
                kills += 1;
                log::info!(
                    "squished {} roach at ({:.0}, {:.0})",
                    roach.kind.get_name(),
                    roach.position.x,
                    roach.position.y
                );
            }
        }
        self.score += kills;
        kills
    }

    /// Spawn at most one roach if below the population cap
    pub fn spawn(&mut self) {
        let target = self.cheese.center();
        if let Some(roach) =
            self.spawner
                .try_spawn(self.roaches.len(), MAX_ROACHES, target, &self.sprites)
        {
            self.roaches.push(roach);
        }
    }

    /// Move every roach, check the cheese, and collect what to draw.
    /// Faded roaches are dropped after the pass, never during it.
    pub fn advance(&mut self, now: Instant) -> Vec<SpriteDraw> {
        let mut draws = Vec::with_capacity(self.roaches.len());

        for roach in &mut self.roaches {
            roach.advance();
            if roach.is_alive() && self.cheese.is_reached_at(roach.position) {
                if !self.over {
                    log::info!("{} roach reached the cheese", roach.kind.get_name());
                }
                self.over = true;
            }
            if let Some(draw) = roach.render_state(now) {
                draws.push(draw);
            }
        }

        self.roaches.retain(|roach| !roach.is_removed());
        draws
    }
}
