//! Movement domain: ground probe system.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementState, MovementTuning, Player};

/// Cast three short rays downward from the feet of the player's collider and
/// record ground contact. This is the only writer of `grounded` and the only
/// forward writer of `grounded_time`; it runs once per tick, before the jump
/// and movement systems, which read the cached flag.
pub(crate) fn probe_ground(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    let filter = SpatialQueryFilter::from_mask(tuning.ground_layers);
    let now = time.elapsed_secs();

    for (transform, collider, mut state) in &mut query {
        let was_grounded = state.grounded;

        let half = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(12.0, 24.0),
        };

        let feet = transform.translation.truncate() - Vec2::new(0.0, half.y);

        // Probes at both bottom corners as well as the center keep the player
        // grounded while hanging off a ledge or straddling a gap.
        let origins = [
            feet,
            feet - Vec2::new(half.x, 0.0),
            feet + Vec2::new(half.x, 0.0),
        ];

        let hit = origins.iter().any(|&origin| {
            spatial_query
                .cast_ray(
                    origin,
                    Dir2::NEG_Y,
                    tuning.grounded_threshold,
                    true,
                    &filter,
                )
                .is_some()
        });

        if hit {
            state.record_grounded(now);
        } else {
            state.grounded = false;
        }

        if state.grounded && !was_grounded {
            debug!("Landed at t={now:.3}");
        } else if !state.grounded && was_grounded {
            debug!("Left ground at t={now:.3}");
        }
    }
}
