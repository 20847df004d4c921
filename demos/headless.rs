//! Drive the engine without a window or GPU.
//!
//! The engine draws through the `Canvas` trait, so a `NullCanvas` gives a
//! fully functional simulation that just renders nothing. Useful for
//! soak-testing the scheduler and entity bookkeeping.
//!
//! Run with: `cargo run --example headless`

use skyburst::prelude::*;

fn main() {
    let mut show = Fireworks::new(NullCanvas::new(1280.0, 720.0))
        .with_delay(0)
        .with_delay_range(10, 30)
        .with_particle_count(60)
        .with_random(EntropySource::seeded(2024));
    show.start();

    for frame in 0..600 {
        show.step();
        if frame % 60 == 0 {
            println!(
                "frame {:3}: {} projectiles, {} sparks, next launch in {} ticks",
                frame,
                show.projectiles().len(),
                show.sparks().len(),
                show.launch_countdown(),
            );
        }
    }

    show.stop();
    assert!(show.projectiles().is_empty() && show.sparks().is_empty());
    println!("stopped; all entities cleared");
}
