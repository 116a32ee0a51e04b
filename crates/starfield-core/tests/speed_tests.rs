// Speed controller: smoothing law, ambient scenarios and both scroll policies.

use starfield_core::{
    smooth_toward, AmbientPolicy, InputState, SpeedBounds, SpeedController, SpeedFlags, Viewport,
};

const BOUNDS: SpeedBounds = SpeedBounds { min: 0.1, max: 2.0 };

fn input() -> InputState {
    InputState::new(Viewport::new(800.0, 600.0))
}

#[test]
fn smoothing_follows_geometric_law() {
    let (s0, target, factor) = (2.0_f32, 0.1_f32, 0.05_f32);
    let mut s = s0;
    for n in 1..=200 {
        s = smooth_toward(s, target, factor);
        let expected = (s0 - target).abs() * (1.0 - factor).powi(n);
        assert!(((s - target).abs() - expected).abs() < 1e-4, "frame {}", n);
    }
}

#[test]
fn convergence_reaches_epsilon_in_bounded_frames() {
    let eps = 1e-3_f32;
    let (s0, target, factor) = (5.0_f32, -3.0_f32, 0.05_f32);
    // (1 - f)^n * |d| < eps  =>  n > ln(eps / |d|) / ln(1 - f)
    let bound = ((eps / (s0 - target).abs()).ln() / (1.0 - factor).ln()).ceil() as usize;
    let mut s = s0;
    for _ in 0..bound {
        s = smooth_toward(s, target, factor);
    }
    assert!((s - target).abs() <= eps * 1.01);
}

#[test]
fn ambient_decay_scenario_from_fast_start_to_forced_slow() {
    // startFast + forceSlow: speed starts at 2.0 and targets 0.1.
    let mut ctl = SpeedController::new(
        BOUNDS,
        AmbientPolicy::default(),
        SpeedFlags {
            force_slow: true,
            start_fast: true,
        },
        0.05,
        60.0,
    );
    let input = input();
    assert_eq!(ctl.speed(), 2.0);
    for frame in 1..=100 {
        ctl.update(&input, frame as f32 / 60.0);
    }
    assert_eq!(ctl.target(), 0.1);
    let expected = 0.1 + 1.9 * 0.95_f32.powi(100);
    assert!((ctl.speed() - expected).abs() < 1e-4);
    assert!((ctl.speed() - 0.1).abs() < 0.012);
    for frame in 101..=104 {
        ctl.update(&input, frame as f32 / 60.0);
    }
    assert!((ctl.speed() - 0.1).abs() < 0.01);
}

#[test]
fn scroll_position_lowers_target_and_tail() {
    let mut ctl = SpeedController::new(
        BOUNDS,
        AmbientPolicy::ScrollMapped {
            settle_distance: 1000.0,
        },
        SpeedFlags {
            force_slow: false,
            start_fast: true,
        },
        0.05,
        60.0,
    );
    let mut input = input();
    let top = ctl.update(&input, 0.0);
    assert_eq!(top.speed, 2.0);
    assert_eq!(top.tail, 60.0);

    input.scrolled_to(1000.0);
    let mut sample = top;
    for _ in 0..300 {
        sample = ctl.update(&input, 0.0);
    }
    assert!((sample.speed - 0.1).abs() < 1e-3);
    assert_eq!(sample.tail, 3.0);
    assert_eq!(ctl.target(), 0.1);
}

#[test]
fn abrupt_scroll_changes_speed_gradually() {
    let mut ctl = SpeedController::new(
        BOUNDS,
        AmbientPolicy::ScrollMapped {
            settle_distance: 1000.0,
        },
        SpeedFlags {
            force_slow: false,
            start_fast: true,
        },
        0.05,
        60.0,
    );
    let mut input = input();
    input.scrolled_to(5000.0);
    let s = ctl.update(&input, 0.0).speed;
    assert!((s - (2.0 - 1.9 * 0.05)).abs() < 1e-5);
}

#[test]
fn decay_policy_waits_for_threshold_then_decays() {
    let mut ctl = SpeedController::new(
        BOUNDS,
        AmbientPolicy::DecayAfterScroll {
            threshold: 400.0,
            lambda: 1.5,
        },
        SpeedFlags {
            force_slow: false,
            start_fast: true,
        },
        0.05,
        60.0,
    );
    let mut input = input();
    ctl.update(&input, 0.0);
    input.scrolled_by(150.0);
    input.scrolled_by(-200.0);
    ctl.update(&input, 0.5);
    assert!(!ctl.is_decaying());
    assert_eq!(ctl.speed(), 2.0);

    input.scrolled_by(60.0);
    ctl.update(&input, 1.0);
    assert!(ctl.is_decaying());
    assert!((ctl.speed() - 2.0).abs() < 1e-5);

    let s = ctl.update(&input, 2.0);
    let expected = 0.1 + 1.9 * (-1.5_f32).exp();
    assert!((s.speed - expected).abs() < 1e-4);
    assert_eq!(s.tail, (60.0 * expected / 2.0).round());

    // Permanent: scrolling back does not leave decay mode.
    input.scrolled_to(0.0);
    let late = ctl.update(&input, 20.0);
    assert!(ctl.is_decaying());
    assert!((late.speed - 0.1).abs() < 1e-3);
}

#[test]
fn reset_restarts_decay_from_new_travel_origin() {
    let mut ctl = SpeedController::new(
        BOUNDS,
        AmbientPolicy::decay(),
        SpeedFlags {
            force_slow: false,
            start_fast: true,
        },
        0.05,
        60.0,
    );
    let mut input = input();
    ctl.update(&input, 0.0);
    input.scrolled_by(1000.0);
    ctl.update(&input, 0.1);
    assert!(ctl.is_decaying());
    ctl.reset();
    ctl.update(&input, 0.0);
    assert!(!ctl.is_decaying());
    assert_eq!(ctl.speed(), 2.0);
}

#[test]
fn crossing_decay_threshold_keeps_forced_slow_field_slow() {
    let mut ctl = SpeedController::new(
        BOUNDS,
        AmbientPolicy::decay(),
        SpeedFlags {
            force_slow: true,
            start_fast: true,
        },
        0.05,
        60.0,
    );
    let mut input = input();
    for frame in 0..200 {
        ctl.update(&input, frame as f32 / 60.0);
    }
    let settled = ctl.speed();
    assert!((settled - 0.1).abs() < 1e-3);

    input.scrolled_by(1000.0);
    for frame in 200..260 {
        let s = ctl.update(&input, frame as f32 / 60.0);
        assert!(s.speed <= settled + 1e-6, "speed rose to {} under forceSlow", s.speed);
        assert_eq!(ctl.target(), 0.1);
    }
    assert!(ctl.is_decaying());
}

#[test]
fn decay_policy_without_fast_start_cruises_then_slows() {
    let mut ctl = SpeedController::new(
        BOUNDS,
        AmbientPolicy::decay(),
        SpeedFlags::default(),
        0.05,
        60.0,
    );
    let mut input = input();
    assert_eq!(ctl.speed(), 0.1);

    let mut before = 0.0;
    for frame in 0..30 {
        before = ctl.update(&input, frame as f32 / 60.0).speed;
    }
    assert_eq!(ctl.target(), 2.0);
    assert!(before > 1.0, "no cruise before the threshold: {}", before);

    input.scrolled_by(1000.0);
    let mut after = before;
    for frame in 30..400 {
        after = ctl.update(&input, frame as f32 / 60.0).speed;
    }
    assert!(ctl.is_decaying());
    assert!(after < before);
    assert!((after - 0.1).abs() < 1e-2);
}

#[test]
fn lifting_force_slow_mid_decay_does_not_jump_back_up() {
    let mut ctl = SpeedController::new(
        BOUNDS,
        AmbientPolicy::decay(),
        SpeedFlags {
            force_slow: false,
            start_fast: true,
        },
        0.05,
        60.0,
    );
    let mut input = input();
    ctl.update(&input, 0.0);
    input.scrolled_by(1000.0);
    ctl.update(&input, 0.1);
    ctl.set_force_slow(true);
    for frame in 1..=60 {
        ctl.update(&input, 0.1 + frame as f32 / 60.0);
    }
    let forced = ctl.speed();
    ctl.set_force_slow(false);
    let s = ctl.update(&input, 1.2).speed;
    assert!(s <= forced + 1e-6);
}
