// Particle pool: recycling bounds and reinitialization on resize.

use starfield_core::{ParticleField, Viewport};

const MAX_DEPTH: f32 = 1000.0;
const SPREAD: f32 = 2.5;

fn within_extent(field: &ParticleField) -> bool {
    let e = field.extent();
    field
        .particles()
        .iter()
        .all(|p| p.position.x.abs() <= e.x && p.position.y.abs() <= e.y)
}

#[test]
fn initial_depths_are_in_range() {
    let field = ParticleField::new(600, Viewport::new(800.0, 600.0), MAX_DEPTH, SPREAD, 3, 7);
    assert_eq!(field.len(), 600);
    assert!(field
        .particles()
        .iter()
        .all(|p| p.depth > 0.0 && p.depth <= MAX_DEPTH));
    assert!(within_extent(&field));
}

#[test]
fn depths_stay_in_range_for_many_frames_and_speeds() {
    let mut field = ParticleField::new(300, Viewport::new(800.0, 600.0), MAX_DEPTH, SPREAD, 1, 11);
    for frame in 0..2000 {
        let speed = [0.1, 2.0, 35.0, 100.0, 999.0][frame % 5];
        field.advance(speed);
        assert_eq!(field.len(), 300);
        for p in field.particles() {
            assert!(p.depth > 0.0 && p.depth <= MAX_DEPTH, "depth {} at frame {}", p.depth, frame);
        }
    }
    assert!(within_extent(&field));
}

#[test]
fn crossing_particles_reset_to_max_depth() {
    let mut field = ParticleField::new(500, Viewport::new(800.0, 600.0), MAX_DEPTH, SPREAD, 1, 3);
    let before: Vec<_> = field.particles().to_vec();
    let speed = 250.0;
    field.advance(speed);
    let mut recycled = 0;
    for (old, new) in before.iter().zip(field.particles()) {
        if old.depth - speed <= 0.0 {
            recycled += 1;
            assert_eq!(new.depth, MAX_DEPTH);
        } else {
            assert!((new.depth - (old.depth - speed)).abs() < 1e-3);
            assert_eq!(new.position, old.position);
        }
    }
    // A quarter of uniformly spread depths lie below 250.
    assert!(recycled > 0);
    assert!(within_extent(&field));
}

#[test]
fn resize_during_run_keeps_count_and_resamples_in_new_bounds() {
    let mut field = ParticleField::new(600, Viewport::new(800.0, 600.0), MAX_DEPTH, SPREAD, 3, 5);
    for _ in 0..30 {
        field.advance(2.0);
    }
    field.resize(Viewport::new(1600.0, 900.0));
    assert_eq!(field.len(), 600);
    let e = field.extent();
    assert_eq!(e.x, 800.0 * SPREAD);
    assert_eq!(e.y, 450.0 * SPREAD);
    assert!(within_extent(&field));
    // The wider bounds are actually used, not just the old ones.
    assert!(field
        .particles()
        .iter()
        .any(|p| p.position.x.abs() > 400.0 * SPREAD));
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::new(50, Viewport::new(320.0, 240.0), MAX_DEPTH, SPREAD, 2, 42);
    let b = ParticleField::new(50, Viewport::new(320.0, 240.0), MAX_DEPTH, SPREAD, 2, 42);
    assert_eq!(a.particles(), b.particles());
}
