use crate::assets::Sprite;
use crate::constants::CHEESE_HIT_MARGIN;
use crate::motion::{Aabb, Point};

/// The target every roach is after. Fixed for the whole session.
#[derive(Debug, Clone)]
pub struct Cheese {
    pub sprite: Sprite,
    /// Where the cheese is drawn
    pub rect: Aabb,
    /// Smaller than `rect` so near misses don't end the game
    pub hitbox: Aabb,
}

impl Cheese {
    pub fn centered(sprite: Sprite, world_width: f32, world_height: f32) -> Self {
        let center = Point::new((world_width / 2.0).floor(), (world_height / 2.0).floor());
        let rect = Aabb::centered(center, sprite.width(), sprite.height());
        let hitbox = rect.inflate(-2.0 * CHEESE_HIT_MARGIN, -2.0 * CHEESE_HIT_MARGIN);
        Self {
            sprite,
            rect,
            hitbox,
        }
    }

    pub fn center(&self) -> Point {
        self.rect.center()
    }

    pub fn is_reached_at(&self, point: Point) -> bool {
        self.hitbox.contains(point)
    }
}
