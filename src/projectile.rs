//! The ascending firework, from launch pad to explosion point.

use glam::Vec2;

use crate::canvas::Canvas;
use crate::color::hsla;

/// Remaining distance below which the projectile counts as arrived.
const ARRIVAL_EPSILON: f32 = 1e-3;

/// Length of the rendered trail segment, in pixels.
const TRAIL_LENGTH: f32 = 12.0;

/// Outcome of one [`Projectile::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flight {
    /// Still on the way up.
    Climbing,
    /// Reached the target this frame. Carries the burst point and hue.
    Arrived { position: Vec2, hue: f32 },
}

/// A firework rocket climbing toward a fixed target point.
///
/// The path is a straight line from origin to target, traversed at a speed
/// that grows by a constant multiplier each frame. The unit direction is
/// computed once at construction; per-frame work is a couple of multiplies.
pub struct Projectile {
    position: Vec2,
    target: Vec2,
    direction: Vec2,
    remaining: f32,
    speed: f32,
    acceleration: f32,
    hue: f32,
}

impl Projectile {
    /// Create a projectile at `origin` aimed at `target`.
    ///
    /// A zero-length path is valid: the projectile arrives on its first
    /// `advance` call instead of dividing by zero to normalize a direction.
    pub fn new(origin: Vec2, target: Vec2, hue: f32, speed: f32, acceleration: f32) -> Self {
        let offset = target - origin;
        let remaining = offset.length();
        let direction = if remaining > ARRIVAL_EPSILON {
            offset / remaining
        } else {
            Vec2::ZERO
        };

        Self {
            position: origin,
            target,
            direction,
            remaining,
            speed,
            acceleration,
            hue,
        }
    }

    /// Draw the trail segment at the current position.
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        let tail = self.position - self.direction * TRAIL_LENGTH;
        canvas.line(tail, self.position, 2.0, hsla(self.hue, 1.0, 0.5, 1.0));
    }

    /// Move one frame along the path and report the outcome.
    ///
    /// The step never overshoots: it is capped at the remaining distance,
    /// so the distance to the target strictly decreases until arrival. On
    /// arrival the position snaps to the target exactly.
    pub fn advance(&mut self) -> Flight {
        let step = self.speed.min(self.remaining);
        self.position += self.direction * step;
        self.remaining -= step;
        self.speed *= self.acceleration;

        if self.remaining <= ARRIVAL_EPSILON {
            self.position = self.target;
            Flight::Arrived {
                position: self.target,
                hue: self.hue,
            }
        } else {
            Flight::Climbing
        }
    }

    /// Current position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Straight-line distance left to the target.
    pub fn distance_remaining(&self) -> f32 {
        self.remaining
    }
}
