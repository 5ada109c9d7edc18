//! Content domain: RON-backed tuning overrides.

mod data;
mod loader;

pub use data::MovementTuningDef;
pub use loader::ContentLoadError;

use std::path::Path;

use bevy::prelude::*;

use crate::movement::MovementTuning;

const MOVEMENT_TUNING_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_movement_tuning);
    }
}

/// Overlay designer tuning from disk onto the defaults. A missing or broken
/// file is not fatal; the defaults are playable.
fn apply_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    match loader::load_tuning(Path::new(MOVEMENT_TUNING_PATH)) {
        Ok(def) => {
            def.apply(&mut tuning);
            info!(
                "Movement tuning loaded: speed={}, jump={}, grace={}s",
                tuning.move_speed, tuning.jump_force, tuning.jump_grace_period
            );
        }
        Err(err) => warn!("Using default movement tuning: {err}"),
    }
}
