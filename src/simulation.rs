//! The fireworks engine: entity ownership, per-frame stepping, scheduling.

use glam::Vec2;

use crate::audio::{SoundPlayer, BURST_SOUND};
use crate::canvas::Canvas;
use crate::projectile::{Flight, Projectile};
use crate::rand::{EntropySource, RandomSource};
use crate::spark::{Fate, Spark};
use crate::time::FrameTimer;

/// How much of the previous frame survives into the next one. Higher values
/// erase faster and shorten the trails.
const FADE_AMOUNT: f32 = 0.5;

/// Base-hue drift per frame, in degrees.
const HUE_DRIFT: f32 = 0.5;

/// Rectangular region launch targets are drawn from, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Boundaries {
    /// Default region for a surface of the given size: the upper half,
    /// inset 50px from the left and right edges.
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            top: 50.0,
            bottom: height * 0.5,
            left: 50.0,
            right: width - 50.0,
        }
    }
}

/// Tunable parameters of a show. All fields have working defaults.
#[derive(Debug, Clone)]
pub struct FireworksConfig {
    /// Base color angle new projectiles start from, 0-360.
    pub hue: f32,
    /// Ticks until the very first launch.
    pub delay: u32,
    /// Lower bound for the re-randomized launch countdown.
    pub min_delay: u32,
    /// Upper bound for the re-randomized launch countdown.
    pub max_delay: u32,
    /// Launch-target region; `None` derives one from the surface size.
    pub boundaries: Option<Boundaries>,
    /// Initial projectile speed in pixels per tick.
    pub firework_speed: f32,
    /// Projectile speed multiplier per tick.
    pub firework_acceleration: f32,
    /// Sparks created per burst.
    pub particle_count: u32,
    /// Spark velocity decay multiplier per tick.
    pub particle_friction: f32,
    /// Downward velocity added to each spark per tick.
    pub particle_gravity: f32,
    /// Draw a live frame-rate readout.
    pub debug: bool,
    /// Trigger the sound hook on each burst.
    pub sounds: bool,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            hue: 120.0,
            delay: 30,
            min_delay: 30,
            max_delay: 90,
            boundaries: None,
            firework_speed: 2.0,
            firework_acceleration: 1.05,
            particle_count: 50,
            particle_friction: 0.95,
            particle_gravity: 1.5,
            debug: false,
            sounds: false,
        }
    }
}

/// A continuous fireworks show on a [`Canvas`].
///
/// The engine owns every live entity and is the only thing that creates or
/// destroys them. Drive it by calling [`Fireworks::step`] once per display
/// frame. [`crate::window::FireworksShow`] does exactly that, or call it
/// yourself for headless use:
///
/// ```ignore
/// let mut show = Fireworks::new(NullCanvas::new(800.0, 600.0))
///     .with_particle_count(80)
///     .with_delay_range(20, 60);
/// show.start();
/// loop {
///     show.step();
/// }
/// ```
pub struct Fireworks<C: Canvas> {
    canvas: C,
    config: FireworksConfig,
    boundaries: Boundaries,
    projectiles: Vec<Projectile>,
    sparks: Vec<Spark>,
    hue: f32,
    countdown: u32,
    running: bool,
    random: Box<dyn RandomSource>,
    sound: Option<Box<dyn SoundPlayer>>,
    timer: FrameTimer,
}

impl<C: Canvas> Fireworks<C> {
    /// Create an engine with default configuration.
    pub fn new(canvas: C) -> Self {
        Self::with_config(canvas, FireworksConfig::default())
    }

    /// Create an engine with the given configuration.
    pub fn with_config(canvas: C, config: FireworksConfig) -> Self {
        let boundaries = config
            .boundaries
            .unwrap_or_else(|| Boundaries::for_surface(canvas.width(), canvas.height()));
        Self {
            boundaries,
            hue: config.hue,
            countdown: config.delay,
            projectiles: Vec::new(),
            sparks: Vec::new(),
            running: false,
            random: Box::new(EntropySource::new()),
            sound: None,
            timer: FrameTimer::new(),
            canvas,
            config,
        }
    }

    // ========== Builder-style configuration ==========

    /// Set the base hue, 0-360.
    pub fn with_hue(mut self, hue: f32) -> Self {
        self.config.hue = hue;
        self.hue = hue;
        self
    }

    /// Set the countdown until the first launch.
    pub fn with_delay(mut self, delay: u32) -> Self {
        self.config.delay = delay;
        self.countdown = delay;
        self
    }

    /// Set the inclusive range the countdown is re-randomized from.
    pub fn with_delay_range(mut self, min: u32, max: u32) -> Self {
        self.config.min_delay = min;
        self.config.max_delay = max;
        self
    }

    /// Set the launch-target region explicitly.
    pub fn with_boundaries(mut self, boundaries: Boundaries) -> Self {
        self.config.boundaries = Some(boundaries);
        self.boundaries = boundaries;
        self
    }

    /// Set the initial projectile speed.
    pub fn with_firework_speed(mut self, speed: f32) -> Self {
        self.config.firework_speed = speed;
        self
    }

    /// Set the per-tick projectile speed multiplier.
    pub fn with_firework_acceleration(mut self, acceleration: f32) -> Self {
        self.config.firework_acceleration = acceleration;
        self
    }

    /// Set how many sparks each burst creates.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.config.particle_count = count;
        self
    }

    /// Set the spark drag multiplier.
    pub fn with_particle_friction(mut self, friction: f32) -> Self {
        self.config.particle_friction = friction;
        self
    }

    /// Set the spark gravity.
    pub fn with_particle_gravity(mut self, gravity: f32) -> Self {
        self.config.particle_gravity = gravity;
        self
    }

    /// Toggle the frame-rate readout.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Toggle burst sound triggering.
    pub fn with_sounds(mut self, sounds: bool) -> Self {
        self.config.sounds = sounds;
        self
    }

    /// Replace the random source. Pass [`crate::rand::Midpoint`] for fully
    /// deterministic runs.
    pub fn with_random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    /// Install the sound hook called on each burst.
    pub fn with_sound_player(mut self, player: impl SoundPlayer + 'static) -> Self {
        self.sound = Some(Box::new(player));
        self
    }

    // ========== Lifecycle ==========

    /// Begin the show. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.clear();
    }

    /// End the show immediately, wiping all entities and the surface.
    ///
    /// Safe to call at any time, including when already stopped; a frame
    /// callback already in flight will see `running == false` in
    /// [`Fireworks::step`] and do nothing.
    pub fn stop(&mut self) {
        self.running = false;
        self.clear();
    }

    /// Toggle between paused and running without touching entity state.
    pub fn pause(&mut self) {
        self.running = !self.running;
    }

    /// Wipe all live entities and the surface. Does not change `running`.
    pub fn clear(&mut self) {
        self.projectiles.clear();
        self.sparks.clear();
        self.canvas.clear();
    }

    /// Whether the show is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ========== Per-frame step ==========

    /// Advance and render one frame. No-op unless running.
    ///
    /// Within a step, every projectile acts before any spark and the launch
    /// countdown is evaluated last: it decrements, and on reaching zero a
    /// projectile launches and the countdown re-randomizes, so launches land
    /// exactly `delay` frames apart. Entities created during a step are not
    /// advanced until the next one.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }

        self.timer.tick();
        self.canvas.fade(FADE_AMOUNT);
        self.hue = (self.hue + HUE_DRIFT).rem_euclid(360.0);

        let mut arrivals: Vec<(Vec2, f32)> = Vec::new();
        let canvas = &mut self.canvas;
        self.projectiles.retain_mut(|projectile| {
            projectile.render(canvas);
            match projectile.advance() {
                Flight::Climbing => true,
                Flight::Arrived { position, hue } => {
                    arrivals.push((position, hue));
                    false
                }
            }
        });

        let canvas = &mut self.canvas;
        self.sparks.retain_mut(|spark| {
            spark.render(canvas);
            spark.advance() == Fate::Glowing
        });

        // Bursts spawn after the spark pass so newborn sparks first advance
        // on the following frame.
        for (position, hue) in arrivals {
            self.burst(position, hue);
        }

        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.launch();
            self.countdown = self
                .random
                .int_between(self.config.min_delay as i32, self.config.max_delay as i32)
                as u32;
        }

        if self.config.debug {
            let readout = format!("{} fps", self.timer.fps().round() as u32);
            self.canvas.text(&readout, Vec2::new(10.0, 26.0));
        }
    }

    fn burst(&mut self, position: Vec2, hue: f32) {
        if self.config.sounds {
            if let Some(player) = self.sound.as_mut() {
                player.play(BURST_SOUND, 2);
            }
        }
        for _ in 0..self.config.particle_count {
            self.sparks.push(Spark::new(
                position,
                hue,
                self.config.particle_friction,
                self.config.particle_gravity,
                self.random.as_mut(),
            ));
        }
    }

    fn launch(&mut self) {
        let origin = Vec2::new(self.canvas.width() * 0.5, self.canvas.height());
        let target = Vec2::new(
            self.random
                .int_between(self.boundaries.left as i32, self.boundaries.right as i32)
                as f32,
            self.random
                .int_between(self.boundaries.top as i32, self.boundaries.bottom as i32)
                as f32,
        );
        self.projectiles.push(Projectile::new(
            origin,
            target,
            self.hue,
            self.config.firework_speed,
            self.config.firework_acceleration,
        ));
    }

    // ========== Diagnostics ==========

    /// Live projectiles, in launch order.
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Live sparks.
    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    /// Ticks until the next launch.
    pub fn launch_countdown(&self) -> u32 {
        self.countdown
    }

    /// Current drifting base hue.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Measured frame rate.
    pub fn fps(&self) -> f32 {
        self.timer.fps()
    }

    /// The drawing surface.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// The drawing surface, mutably. Windowed backends need this to present
    /// and resize.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::NullCanvas;
    use crate::rand::Midpoint;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn engine() -> Fireworks<NullCanvas> {
        Fireworks::new(NullCanvas::new(800.0, 600.0))
    }

    #[test]
    fn step_before_start_is_a_noop() {
        let mut show = engine().with_delay(0);
        show.step();
        assert!(show.projectiles().is_empty());
        assert!(show.sparks().is_empty());
    }

    #[test]
    fn start_is_idempotent() {
        let mut show = engine().with_delay(0);
        show.start();
        show.step();
        assert_eq!(show.projectiles().len(), 1);

        // A second start while running must not reset anything.
        show.start();
        assert!(show.is_running());
        assert_eq!(show.projectiles().len(), 1);
    }

    #[test]
    fn stop_clears_and_is_idempotent() {
        let mut show = engine().with_delay(0);
        show.start();
        show.step();
        assert!(!show.projectiles().is_empty());

        show.stop();
        assert!(!show.is_running());
        assert!(show.projectiles().is_empty());
        show.stop();
        assert!(!show.is_running());

        // In-flight frame callbacks must bail out after stop.
        show.step();
        assert!(show.projectiles().is_empty());
    }

    #[test]
    fn pause_keeps_entity_state_intact() {
        let mut show = engine().with_delay(0);
        show.start();
        show.step();
        let live = show.projectiles().len();
        assert!(live > 0);

        show.pause();
        assert!(!show.is_running());
        show.step();
        assert_eq!(show.projectiles().len(), live);

        show.pause();
        assert!(show.is_running());
    }

    #[test]
    fn clear_empties_collections_without_stopping() {
        let mut show = engine().with_delay(0).with_random(Midpoint);
        show.start();
        for _ in 0..400 {
            show.step();
        }
        show.clear();
        assert!(show.projectiles().is_empty());
        assert!(show.sparks().is_empty());
        assert!(show.is_running());
    }

    #[test]
    fn delay_of_one_launches_on_the_first_step() {
        let mut show = engine().with_delay(1).with_delay_range(1, 1).with_random(Midpoint);
        show.start();
        show.step();
        assert_eq!(show.projectiles().len(), 1);
    }

    #[test]
    fn launches_are_exactly_delay_frames_apart() {
        let mut show = engine().with_delay(3).with_delay_range(3, 3).with_random(Midpoint);
        show.start();

        let mut launch_frames = Vec::new();
        for frame in 1..=13 {
            let before = show.projectiles().len();
            show.step();
            if show.projectiles().len() > before {
                launch_frames.push(frame);
            }
        }
        assert_eq!(launch_frames, vec![3, 6, 9, 12]);
    }

    #[test]
    fn countdown_rerandomizes_within_bounds() {
        let mut show = engine().with_delay(0).with_delay_range(5, 9);
        show.start();

        let mut previous = show.launch_countdown();
        let mut launches = 0;
        for _ in 0..200 {
            show.step();
            let now = show.launch_countdown();
            if now > previous {
                // A launch just re-randomized the countdown.
                assert!((5..=9).contains(&now));
                launches += 1;
            }
            previous = now;
        }
        assert!(launches > 10);
    }

    #[test]
    fn launch_target_is_the_boundary_midpoint_under_midpoint_random() {
        let bounds = Boundaries {
            top: 50.0,
            bottom: 150.0,
            left: 100.0,
            right: 200.0,
        };
        let mut show = engine()
            .with_boundaries(bounds)
            .with_delay(0)
            .with_particle_count(4)
            .with_random(Midpoint);
        show.start();

        // Step until the projectile arrives and bursts.
        for _ in 0..1_000 {
            show.step();
            if !show.sparks().is_empty() {
                break;
            }
        }
        // Newborn sparks have not advanced yet: they still sit exactly on
        // the arrival point, which must be the boundary-rect midpoint.
        assert_eq!(show.sparks().len(), 4);
        assert_eq!(show.sparks()[0].position(), Vec2::new(150.0, 100.0));
    }

    #[test]
    fn burst_fans_out_exactly_particle_count_sparks() {
        let mut show = engine()
            .with_delay(0)
            .with_delay_range(500, 500)
            .with_particle_count(7)
            .with_random(Midpoint);
        show.start();

        for _ in 0..1_000 {
            show.step();
            if !show.sparks().is_empty() {
                break;
            }
        }
        assert_eq!(show.sparks().len(), 7);
        assert!(show.projectiles().is_empty(), "arrived projectile must be gone");
    }

    #[test]
    fn burst_sparks_have_distinct_velocities() {
        let mut show = engine()
            .with_delay(0)
            .with_delay_range(500, 500)
            .with_particle_count(30);
        show.start();
        for _ in 0..1_000 {
            show.step();
            if !show.sparks().is_empty() {
                break;
            }
        }
        let sparks = show.sparks();
        assert_eq!(sparks.len(), 30);
        for i in 0..sparks.len() {
            for j in (i + 1)..sparks.len() {
                assert_ne!(sparks[i].velocity(), sparks[j].velocity());
            }
        }
    }

    #[test]
    fn sound_hook_fires_once_per_burst() {
        let plays = Rc::new(RefCell::new(0));
        let counter = plays.clone();
        let mut show = engine()
            .with_delay(0)
            .with_delay_range(500, 500)
            .with_sounds(true)
            .with_random(Midpoint)
            .with_sound_player(move |_sound, _channels| *counter.borrow_mut() += 1);
        show.start();

        for _ in 0..1_000 {
            show.step();
            if !show.sparks().is_empty() {
                break;
            }
        }
        assert_eq!(*plays.borrow(), 1);
    }

    #[test]
    fn sound_hook_silent_when_sounds_disabled() {
        let plays = Rc::new(RefCell::new(0));
        let counter = plays.clone();
        let mut show = engine()
            .with_delay(0)
            .with_delay_range(500, 500)
            .with_random(Midpoint)
            .with_sound_player(move |_, _| *counter.borrow_mut() += 1);
        show.start();
        for _ in 0..1_000 {
            show.step();
            if !show.sparks().is_empty() {
                break;
            }
        }
        assert_eq!(*plays.borrow(), 0);
    }

    #[test]
    fn hue_drifts_and_wraps() {
        let mut show = engine().with_hue(359.8);
        show.start();
        show.step();
        let hue = show.hue();
        assert!((0.0..360.0).contains(&hue));
        assert!((hue - 0.3).abs() < 1e-3);
    }

    #[test]
    fn default_boundaries_derive_from_surface() {
        let bounds = Boundaries::for_surface(800.0, 600.0);
        assert_eq!(
            bounds,
            Boundaries {
                top: 50.0,
                bottom: 300.0,
                left: 50.0,
                right: 750.0,
            }
        );
    }
}
