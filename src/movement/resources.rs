//! Movement domain: tuning and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Horizontal speed the smoothed velocity converges toward at full input.
    pub move_speed: f32,
    /// Lerp factor while grounded, or airborne with air control off.
    pub move_lerp_factor: f32,
    /// Whether airborne steering uses the reduced `air_lerp_factor`.
    pub air_control: bool,
    /// Lerp factor while airborne with air control on.
    pub air_lerp_factor: f32,
    /// Vertical velocity set by a jump (overwrite, not additive).
    pub jump_force: f32,
    /// How far below the collider the ground probe reaches.
    pub grounded_threshold: f32,
    /// Time after leaving ground during which a jump still succeeds.
    pub jump_grace_period: f32,
    /// Layers the ground probe casts against. An empty mask means the player
    /// is simply never grounded.
    pub ground_layers: LayerMask,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 200.0,
            move_lerp_factor: 0.3,
            air_control: true,
            air_lerp_factor: 0.1,
            jump_force: 340.0,
            grounded_threshold: 2.0,
            jump_grace_period: 0.2,
            ground_layers: GameLayer::Ground.into(),
        }
    }
}

/// Per-tick input snapshot. The axis is resampled every frame; the jump flag
/// latches between fixed ticks and is cleared by the jump system once handled.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1].
    pub axis_x: f32,
    pub jump_pressed: bool,
}
