//! Movement domain: ground-probed, grace-period platformer locomotion.

mod bootstrap;
mod components;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{GameLayer, Ground, MovementState, Player};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                Startup,
                (bootstrap::spawn_player, bootstrap::spawn_test_room),
            )
            .add_systems(Update, systems::read_input)
            // One probe per tick, then jump gating, then smoothing; the chain
            // runs in FixedUpdate ahead of the avian physics step.
            .add_systems(
                FixedUpdate,
                (
                    systems::probe_ground,
                    systems::apply_jump,
                    systems::apply_horizontal,
                )
                    .chain(),
            );
    }
}
