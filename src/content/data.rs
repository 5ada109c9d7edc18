//! Serde definitions for tuning data files.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// On-disk movement tuning. Field-for-field mirror of [`MovementTuning`]
/// minus the layer mask, which stays code-side.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementTuningDef {
    pub move_speed: f32,
    pub move_lerp_factor: f32,
    pub air_control: bool,
    pub air_lerp_factor: f32,
    pub jump_force: f32,
    pub grounded_threshold: f32,
    pub jump_grace_period: f32,
}

impl MovementTuningDef {
    /// Apply this def over the live tuning, clamping lerp factors into [0, 1].
    /// Smoothing diverges outside that range, so out-of-range values are a
    /// data mistake worth a warning rather than a fault.
    pub fn apply(&self, tuning: &mut MovementTuning) {
        tuning.move_speed = self.move_speed;
        tuning.move_lerp_factor = clamp_factor("move_lerp_factor", self.move_lerp_factor);
        tuning.air_control = self.air_control;
        tuning.air_lerp_factor = clamp_factor("air_lerp_factor", self.air_lerp_factor);
        tuning.jump_force = self.jump_force;
        tuning.grounded_threshold = self.grounded_threshold;
        tuning.jump_grace_period = self.jump_grace_period;
    }
}

fn clamp_factor(name: &str, value: f32) -> f32 {
    if !(0.0..=1.0).contains(&value) {
        warn!("{name} = {value} outside [0, 1], clamping");
    }
    value.clamp(0.0, 1.0)
}
