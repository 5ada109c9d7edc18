//! Movement domain: tests for smoothing, jump gating, and grace timing.

use super::components::JUMP_LOCKOUT;
use super::systems::movement::{smoothing_factor, step_horizontal, try_jump};
use super::{GameLayer, MovementState, MovementTuning};

/// Reference tuning in unscaled units, small enough to check by hand.
fn tuning() -> MovementTuning {
    MovementTuning {
        move_speed: 5.0,
        move_lerp_factor: 0.3,
        air_control: true,
        air_lerp_factor: 0.1,
        jump_force: 8.5,
        grounded_threshold: 0.02,
        jump_grace_period: 0.2,
        ground_layers: GameLayer::Ground.into(),
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

// -----------------------------------------------------------------------------
// Horizontal smoothing
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_step_moves_by_factor_toward_target() {
    let t = tuning();
    // target 5.0, factor 0.3: one step from rest lands at 1.5
    assert!(approx(step_horizontal(0.0, 1.0, &t, true), 1.5));
}

#[test]
fn test_airborne_uses_reduced_factor() {
    let t = tuning();
    assert!(approx(step_horizontal(0.0, 1.0, &t, false), 0.5));
}

#[test]
fn test_air_control_disabled_ignores_airborne_factor() {
    let t = MovementTuning {
        air_control: false,
        ..tuning()
    };
    // Airborne, but the grounded factor applies: same 1.5 as on the ground.
    assert!(approx(step_horizontal(0.0, 1.0, &t, false), 1.5));
}

#[test]
fn test_smoothing_factor_selection() {
    let t = tuning();
    assert_eq!(smoothing_factor(&t, true), t.move_lerp_factor);
    assert_eq!(smoothing_factor(&t, false), t.air_lerp_factor);

    let no_air = MovementTuning {
        air_control: false,
        ..tuning()
    };
    assert_eq!(smoothing_factor(&no_air, false), no_air.move_lerp_factor);
}

#[test]
fn test_held_input_converges_monotonically_without_overshoot() {
    let t = tuning();
    let target = t.move_speed;

    let mut v = 0.0;
    for _ in 0..100 {
        let next = step_horizontal(v, 1.0, &t, true);
        assert!(next >= v, "velocity regressed: {v} -> {next}");
        assert!(next <= target + 1e-5, "overshot target: {next}");
        v = next;
    }
    assert!(approx(v, target));
}

#[test]
fn test_convergence_from_above_never_undershoots() {
    let t = tuning();
    let target = t.move_speed;

    let mut v = 10.0;
    for _ in 0..100 {
        let next = step_horizontal(v, 1.0, &t, true);
        assert!(next <= v);
        assert!(next >= target - 1e-5);
        v = next;
    }
}

#[test]
fn test_negative_input_converges_to_negative_target() {
    let t = tuning();
    let mut v = 0.0;
    for _ in 0..100 {
        v = step_horizontal(v, -1.0, &t, true);
    }
    assert!(approx(v, -t.move_speed));
}

#[test]
fn test_factor_bounds() {
    let snap = MovementTuning {
        move_lerp_factor: 1.0,
        ..tuning()
    };
    assert!(approx(step_horizontal(2.0, 1.0, &snap, true), 5.0));

    let frozen = MovementTuning {
        move_lerp_factor: 0.0,
        ..tuning()
    };
    assert!(approx(step_horizontal(2.0, 1.0, &frozen, true), 2.0));
}

// -----------------------------------------------------------------------------
// Jump gating
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_jump_sets_exact_jump_force() {
    let t = tuning();
    let mut state = MovementState {
        grounded: true,
        grounded_time: 1.0,
    };
    // Overwrite semantics: the downward velocity is cancelled, not slowed.
    let mut vy = -3.0;

    assert!(try_jump(&mut state, &mut vy, 1.0, &t));
    assert_eq!(vy, t.jump_force);
}

#[test]
fn test_airborne_past_grace_is_a_noop() {
    let t = tuning();
    let mut state = MovementState {
        grounded: false,
        grounded_time: 0.0,
    };
    let mut vy = -2.0;

    assert!(!try_jump(&mut state, &mut vy, 0.5, &t));
    assert_eq!(vy, -2.0);
    assert_eq!(state.grounded_time, 0.0);
}

#[test]
fn test_grace_jump_succeeds_exactly_once() {
    let t = tuning();
    let mut state = MovementState {
        grounded: false,
        grounded_time: 0.0,
    };
    let mut vy = -1.0;

    // Within the 0.2s window: succeeds.
    assert!(try_jump(&mut state, &mut vy, 0.15, &t));
    assert_eq!(vy, t.jump_force);
    assert!(approx(state.grounded_time, -(t.jump_grace_period + JUMP_LOCKOUT)));

    // One tick later the window is spent.
    assert!(!try_jump(&mut state, &mut vy, 0.16, &t));
    assert_eq!(vy, t.jump_force);
}

#[test]
fn test_can_jump_at_exact_grace_boundary() {
    let state = MovementState {
        grounded: false,
        grounded_time: 0.0,
    };
    assert!(state.can_jump(0.2, 0.2));
    assert!(!state.can_jump(0.2001, 0.2));
}

#[test]
fn test_grounded_flag_overrides_stale_time() {
    let state = MovementState {
        grounded: true,
        grounded_time: -100.0,
    };
    assert!(state.can_jump(500.0, 0.2));
}

#[test]
fn test_probe_hit_reopens_the_grace_window() {
    let t = tuning();
    let mut state = MovementState {
        grounded: false,
        grounded_time: 0.0,
    };
    let mut vy = 0.0;

    assert!(try_jump(&mut state, &mut vy, 0.1, &t));
    assert!(!try_jump(&mut state, &mut vy, 0.11, &t));

    // Landing again restores jumping.
    state.record_grounded(2.0);
    state.grounded = false;
    assert!(try_jump(&mut state, &mut vy, 2.1, &t));
}
