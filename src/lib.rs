//! # Skyburst
//!
//! A fireworks particle engine: continuous, randomized fireworks shows
//! rendered onto a 2D canvas with motion trails and additive glow.
//!
//! Skyburst owns the whole simulation loop: launching rockets at
//! randomized intervals, flying them to their targets, bursting them into
//! drag-and-gravity sparks, and retiring everything that fades out.
//!
//! ## Quick Start
//!
//! ```ignore
//! use skyburst::prelude::*;
//!
//! fn main() -> Result<(), skyburst::ShowError> {
//!     FireworksShow::with_config(FireworksConfig {
//!         particle_count: 80,
//!         sounds: false,
//!         ..Default::default()
//!     })
//!     .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Entities
//!
//! Two kinds of entity exist, both owned exclusively by the engine:
//!
//! - [`Projectile`]: a rocket climbing from the launch pad to a randomized
//!   target, accelerating each frame.
//! - [`Spark`]: one fragment of a burst, slowed by drag, pulled down by
//!   gravity, fading linearly until it is removed.
//!
//! Each entity's per-frame step returns a tagged outcome ([`Flight`],
//! [`Fate`]) that the engine pattern-matches on; there are no callbacks.
//!
//! ### The engine
//!
//! [`Fireworks`] holds the live entities, the drifting base hue and the
//! launch countdown, and advances everything once per [`Fireworks::step`]
//! call. It draws through the [`Canvas`] trait, so it runs identically
//! against the GPU backend, a test double, or nothing at all
//! ([`NullCanvas`]).
//!
//! ### The frame driver
//!
//! [`FireworksShow`] is the batteries-included runner: a winit window, a
//! wgpu canvas, and a redraw loop that steps the engine once per display
//! refresh.
//!
//! ## Configuration
//!
//! | option | meaning | default |
//! |--------|---------|---------|
//! | `hue` | base color angle, 0-360 | 120 |
//! | `delay` / `min_delay` / `max_delay` | launch countdown ticks | 30 / 30 / 90 |
//! | `boundaries` | launch-target rectangle | derived from surface |
//! | `firework_speed` | initial projectile speed | 2.0 |
//! | `firework_acceleration` | speed multiplier per tick | 1.05 |
//! | `particle_count` | sparks per burst | 50 |
//! | `particle_friction` | spark drag per tick | 0.95 |
//! | `particle_gravity` | spark gravity per tick | 1.5 |
//! | `debug` | live frame-rate readout | false |
//! | `sounds` | trigger the sound hook on bursts | false |

pub mod audio;
pub mod canvas;
pub mod color;
pub mod error;
pub mod gpu;
pub mod projectile;
pub mod rand;
pub mod simulation;
pub mod spark;
pub mod time;
pub mod window;

pub use audio::SoundPlayer;
pub use canvas::{Canvas, NullCanvas};
pub use error::{GpuError, ShowError};
pub use glam::{Vec2, Vec4};
pub use gpu::WgpuCanvas;
pub use projectile::{Flight, Projectile};
pub use rand::{EntropySource, Midpoint, RandomSource};
pub use simulation::{Boundaries, Fireworks, FireworksConfig};
pub use spark::{Fate, Spark};
pub use time::FrameTimer;
pub use window::FireworksShow;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use skyburst::prelude::*;
/// ```
pub mod prelude {
    pub use crate::audio::SoundPlayer;
    pub use crate::canvas::{Canvas, NullCanvas};
    pub use crate::rand::{EntropySource, Midpoint, RandomSource};
    pub use crate::simulation::{Boundaries, Fireworks, FireworksConfig};
    pub use crate::window::FireworksShow;
    pub use crate::{Vec2, Vec4};
}
