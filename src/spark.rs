//! One fragment of an explosion.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::canvas::Canvas;
use crate::color::hsla;
use crate::rand::RandomSource;

/// Initial speed range for a freshly spawned spark.
const SPEED_MIN: f32 = 1.0;
const SPEED_MAX: f32 = 10.0;

/// Per-frame alpha decay range. Drawn once at construction so sparks from
/// the same burst burn out at slightly different times.
const DECAY_MIN: f32 = 0.015;
const DECAY_MAX: f32 = 0.03;

/// Hue jitter around the parent projectile's hue, in degrees.
const HUE_JITTER: f32 = 20.0;

/// Rendered dot radius, in pixels.
const RADIUS: f32 = 2.0;

/// Outcome of one [`Spark::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Still visible.
    Glowing,
    /// Fully faded this frame; remove from the live set.
    Faded,
}

/// A glowing fragment thrown out by a burst.
///
/// Subject to drag and constant downward gravity, fading linearly over its
/// lifetime. All randomization happens once, in [`Spark::new`]; `advance`
/// is pure arithmetic.
pub struct Spark {
    position: Vec2,
    velocity: Vec2,
    friction: f32,
    gravity: f32,
    hue: f32,
    alpha: f32,
    decay: f32,
}

impl Spark {
    /// Spawn a spark at the burst point.
    ///
    /// The launch direction is uniform over the full circle and the launch
    /// speed uniform over a bounded range, so no two sparks of a burst are
    /// likely to share a velocity.
    pub fn new(
        position: Vec2,
        hue: f32,
        friction: f32,
        gravity: f32,
        random: &mut dyn RandomSource,
    ) -> Self {
        let angle = random.float_between(0.0, TAU);
        let speed = random.float_between(SPEED_MIN, SPEED_MAX);

        Self {
            position,
            velocity: Vec2::from_angle(angle) * speed,
            friction,
            gravity,
            hue: hue + random.float_between(-HUE_JITTER, HUE_JITTER),
            alpha: 1.0,
            decay: random.float_between(DECAY_MIN, DECAY_MAX),
        }
    }

    /// Draw the spark with its remaining alpha as opacity.
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        canvas.dot(self.position, RADIUS, hsla(self.hue, 1.0, 0.5, self.alpha));
    }

    /// Apply one frame of physics and report whether the spark survives.
    ///
    /// Gravity pulls the vertical velocity down (y grows downward), drag
    /// scales both components, then the position integrates and the alpha
    /// drops by the per-spark decay.
    pub fn advance(&mut self) -> Fate {
        self.velocity.y += self.gravity;
        self.velocity *= self.friction;
        self.position += self.velocity;
        self.alpha -= self.decay;

        if self.alpha <= 0.0 {
            self.alpha = 0.0;
            Fate::Faded
        } else {
            Fate::Glowing
        }
    }

    /// Current position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Remaining opacity in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::{EntropySource, Midpoint};

    fn spawn(random: &mut dyn RandomSource) -> Spark {
        Spark::new(Vec2::new(100.0, 100.0), 200.0, 0.95, 1.5, random)
    }

    #[test]
    fn alpha_strictly_decreases_until_faded() {
        let mut random = EntropySource::seeded(5);
        let mut spark = spawn(&mut random);
        let mut last = spark.alpha();

        for step in 0.. {
            assert!(step < 1_000, "spark never faded");
            let fate = spark.advance();
            assert!(spark.alpha() < last);
            last = spark.alpha();
            if fate == Fate::Faded {
                assert_eq!(spark.alpha(), 0.0);
                break;
            }
        }
    }

    #[test]
    fn fades_exactly_once() {
        let mut random = EntropySource::seeded(17);
        let mut spark = spawn(&mut random);
        let mut fades = 0;
        for _ in 0..200 {
            if spark.advance() == Fate::Faded {
                fades += 1;
                break;
            }
        }
        assert_eq!(fades, 1);
    }

    #[test]
    fn gravity_pulls_velocity_down() {
        // Midpoint puts the launch angle at pi: horizontal, no vertical kick.
        let mut random = Midpoint;
        let mut spark = spawn(&mut random);
        assert!(spark.velocity().y.abs() < 1e-3);
        spark.advance();
        assert!(spark.velocity().y > 0.0);
    }

    #[test]
    fn friction_shrinks_horizontal_speed() {
        let mut random = Midpoint;
        let mut spark = spawn(&mut random);
        let before = spark.velocity().x.abs();
        spark.advance();
        assert!(spark.velocity().x.abs() < before);
    }

    #[test]
    fn velocities_vary_between_sparks() {
        let mut random = EntropySource::seeded(23);
        let sparks: Vec<Spark> = (0..50).map(|_| spawn(&mut random)).collect();
        for pair in sparks.windows(2) {
            assert_ne!(pair[0].velocity(), pair[1].velocity());
        }
    }
}
