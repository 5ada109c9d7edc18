//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Pushed onto `grounded_time` along with the grace period when a jump is
/// taken, so residual grace time cannot fund a second jump before the body
/// has actually left the ground.
pub(crate) const JUMP_LOCKOUT: f32 = 0.01;

/// Per-player locomotion state. `grounded` and `grounded_time` are written
/// only by the once-per-tick ground probe; a jump moves `grounded_time`
/// backward but never forward.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    /// Result of this tick's ground probe.
    pub grounded: bool,
    /// Simulation time at which the probe last confirmed ground contact.
    pub grounded_time: f32,
}

impl MovementState {
    pub(crate) fn record_grounded(&mut self, now: f32) {
        self.grounded = true;
        self.grounded_time = now;
    }

    /// True while grounded or within the grace window after leaving ground.
    pub fn can_jump(&self, now: f32, grace_period: f32) -> bool {
        self.grounded || now - self.grounded_time <= grace_period
    }

    /// Spend the grace window: move `grounded_time` back past it so the next
    /// jump request must wait for a fresh probe hit.
    pub(crate) fn consume_jump(&mut self, grace_period: f32) {
        self.grounded_time -= grace_period + JUMP_LOCKOUT;
    }
}
