//! End-to-end tests driving the engine through its public API.
//!
//! All runs are deterministic: a `NullCanvas` surface and the `Midpoint`
//! random source, which aims every launch at the boundary-rect center and
//! fixes every countdown at the mean delay.

use skyburst::prelude::*;

fn deterministic_show(particle_count: u32) -> Fireworks<NullCanvas> {
    Fireworks::new(NullCanvas::new(800.0, 600.0))
        .with_delay(0)
        .with_delay_range(1, 1)
        .with_particle_count(particle_count)
        .with_random(Midpoint)
}

#[test]
fn launch_flight_burst_and_cleanup() {
    let mut show = deterministic_show(3);
    show.start();
    assert!(show.is_running());

    // Frame 1: the countdown has elapsed, so a projectile is created. New
    // entities are not advanced within the frame that creates them.
    show.step();
    assert_eq!(show.projectiles().len(), 1);
    assert!(show.sparks().is_empty());

    // Default boundaries on 800x600 are {top: 50, bottom: 300, left: 50,
    // right: 750}; the midpoint target is (400, 175), straight above the
    // bottom-center launch pad.
    let first = &show.projectiles()[0];
    assert_eq!(first.position(), Vec2::new(400.0, 600.0));
    assert_eq!(first.distance_remaining(), 425.0);

    // Drive frames until the first burst appears.
    let mut frames = 0;
    while show.sparks().is_empty() {
        show.step();
        frames += 1;
        assert!(frames < 1_000, "projectile never arrived");
    }

    // Exactly one arrival happened this frame: exactly particle_count
    // sparks exist, all sitting on the burst point, and the arrived
    // projectile is gone from the live set.
    assert_eq!(show.sparks().len(), 3);
    for spark in show.sparks() {
        assert_eq!(spark.position(), Vec2::new(400.0, 175.0));
        assert_eq!(spark.alpha(), 1.0);
    }
    for projectile in show.projectiles() {
        assert!(projectile.distance_remaining() > 0.0);
    }
}

#[test]
fn faded_sparks_are_removed_from_the_live_set() {
    let mut show = deterministic_show(5);
    show.start();

    // Sparks decay at a fixed per-spark rate (the midpoint draw is 0.0225
    // per frame, under 50 frames of life), so with bursts of 5 the live
    // population must stay bounded and no dead spark may linger.
    for _ in 0..500 {
        show.step();
        assert!(show.sparks().iter().all(|s| s.alpha() > 0.0));
        assert!(show.sparks().len() <= 300, "faded sparks are accumulating");
    }
}

#[test]
fn stop_is_immediate_and_reentrant_safe() {
    let mut show = deterministic_show(10);
    show.start();
    for _ in 0..100 {
        show.step();
    }
    assert!(show.projectiles().len() + show.sparks().len() > 0);

    show.stop();
    assert!(!show.is_running());
    assert!(show.projectiles().is_empty());
    assert!(show.sparks().is_empty());

    // A frame callback already scheduled before stop() must do nothing.
    show.step();
    assert!(show.projectiles().is_empty());
    assert!(show.sparks().is_empty());

    // Stopping again is a no-op, and the show can start fresh afterwards.
    // With a fixed delay of 1 every step launches exactly one projectile.
    show.stop();
    show.start();
    show.step();
    assert_eq!(show.projectiles().len(), 1);
}

#[test]
fn pause_freezes_and_resumes_the_same_state() {
    let mut show = deterministic_show(8);
    show.start();
    for _ in 0..50 {
        show.step();
    }

    show.pause();
    let projectiles = show.projectiles().len();
    let sparks = show.sparks().len();
    for _ in 0..25 {
        show.step();
    }
    assert_eq!(show.projectiles().len(), projectiles);
    assert_eq!(show.sparks().len(), sparks);

    show.pause();
    assert!(show.is_running());
}

#[test]
fn clear_wipes_entities_but_not_the_run_state() {
    let mut show = deterministic_show(8);
    show.start();
    for _ in 0..100 {
        show.step();
    }
    show.clear();
    assert!(show.is_running());
    assert!(show.projectiles().is_empty());
    assert!(show.sparks().is_empty());

    // The scheduler is untouched: launches continue.
    let mut frames = 0;
    while show.projectiles().is_empty() {
        show.step();
        frames += 1;
        assert!(frames < 10, "launching should resume within the delay range");
    }
}
