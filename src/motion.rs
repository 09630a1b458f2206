//! Geometry and movement helpers shared by every roach
use crate::constants::{SWIRL_RADIUS, SWIRL_STEP};

/// A point in world coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle with half-open containment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn centered(center: Point, width: f32, height: f32) -> Self {
        Self {
            left: center.x - width / 2.0,
            top: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Grow (positive) or shrink (negative) the rectangle around its center.
    /// `dx`/`dy` are the total change per axis, split evenly between sides.
    pub fn inflate(&self, dx: f32, dy: f32) -> Self {
        let width = (self.width + dx).max(0.0);
        let height = (self.height + dy).max(0.0);
        Self::centered(self.center(), width, height)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }
}

/// Advance `position` by `speed` units toward `target`.
/// A zero-length direction leaves the position where it is.
pub fn step_toward(position: Point, target: Point, speed: f32) -> Point {
    let (dx, dy) = direction(position, target);
    Point::new(position.x + dx * speed, position.y + dy * speed)
}

/// Straight step toward the target plus a circular offset of
/// [`SWIRL_RADIUS`] at angle `phase`.
pub fn step_swirl(position: Point, target: Point, speed: f32, phase: f32) -> Point {
    let straight = step_toward(position, target, speed);
    Point::new(
        straight.x + SWIRL_RADIUS * phase.cos(),
        straight.y + SWIRL_RADIUS * phase.sin(),
    )
}

/// Phase after one frame of swirling
pub fn advance_phase(phase: f32, clockwise: bool) -> f32 {
    if clockwise {
        phase + SWIRL_STEP
    } else {
        phase - SWIRL_STEP
    }
}

/// Angle in degrees of the vector from `position` to `target`
pub fn heading_degrees(position: Point, target: Point) -> f32 {
    (target.y - position.y).atan2(target.x - position.x).to_degrees()
}

fn direction(position: Point, target: Point) -> (f32, f32) {
    let dx = target.x - position.x;
    let dy = target.y - position.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance == 0.0 {
        return (0.0, 0.0);
    }
    (dx / distance, dy / distance)
}
