//! Movement domain: player and test room spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, MovementState, Player};

pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        MovementState::default(),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            // Zero friction so the lerp smoothing owns horizontal speed and
            // the body cannot cling to walls on the way down.
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1000.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1000.0, 40.0),
        ground_layers,
    ));

    // Side walls, on the ground layer so corner probes treat them as ledges
    for x in [-520.0, 520.0] {
        commands.spawn((
            Ground,
            Sprite {
                color: ground_color,
                custom_size: Some(Vec2::new(40.0, 500.0)),
                ..default()
            },
            Transform::from_xyz(x, 50.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 500.0),
            ground_layers,
        ));
    }

    // Platforms at staggered heights for grace-period jump testing
    for (x, y, w) in [(-250.0, -60.0, 150.0), (250.0, 30.0, 150.0), (0.0, 120.0, 120.0)] {
        commands.spawn((
            Ground,
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(w, 20.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(w, 20.0),
            ground_layers,
        ));
    }
}
