//! A dense grand-finale show: short launch intervals, big bursts.
//!
//! Run with: `cargo run --example finale`

use skyburst::prelude::*;

fn main() {
    let config = FireworksConfig {
        particle_count: 120,
        delay: 5,
        min_delay: 3,
        max_delay: 12,
        firework_acceleration: 1.08,
        ..Default::default()
    };

    if let Err(e) = FireworksShow::with_config(config).run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
