//! Movement domain: jump gating and horizontal velocity smoothing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

/// Pick the active smoothing factor. With air control disabled the grounded
/// factor applies everywhere, so being airborne changes nothing.
pub(crate) fn smoothing_factor(tuning: &MovementTuning, grounded: bool) -> f32 {
    if grounded || !tuning.air_control {
        tuning.move_lerp_factor
    } else {
        tuning.air_lerp_factor
    }
}

/// One fixed-tick step of horizontal smoothing: lerp the current velocity
/// toward `axis_x * move_speed`. For factors in [0, 1] this converges without
/// overshoot while input is held.
pub(crate) fn step_horizontal(
    current: f32,
    axis_x: f32,
    tuning: &MovementTuning,
    grounded: bool,
) -> f32 {
    let target = axis_x * tuning.move_speed;
    current.lerp(target, smoothing_factor(tuning, grounded))
}

/// Gate-and-mutate jump. On success the vertical velocity is overwritten with
/// `jump_force` (not added, so a grace-period jump cancels the fall instead of
/// merely slowing it) and the grace window is consumed.
pub(crate) fn try_jump(
    state: &mut MovementState,
    velocity_y: &mut f32,
    now: f32,
    tuning: &MovementTuning,
) -> bool {
    if !state.can_jump(now, tuning.jump_grace_period) {
        return false;
    }
    *velocity_y = tuning.jump_force;
    state.consume_jump(tuning.jump_grace_period);
    true
}

pub(crate) fn apply_jump(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_pressed {
        return;
    }
    // A request that cannot be honored is dropped, not buffered.
    input.jump_pressed = false;

    let now = time.elapsed_secs();
    for (mut state, mut velocity) in &mut query {
        if try_jump(&mut state, &mut velocity.y, now, &tuning) {
            debug!("Jump at t={now:.3}");
        }
    }
}

pub(crate) fn apply_horizontal(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        velocity.x = step_horizontal(velocity.x, input.axis_x, &tuning, state.grounded);
    }
}
