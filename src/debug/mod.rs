//! Debug overlay for movement state (dev-tools feature).

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementState, MovementTuning, Player};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Marker for the movement info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(Update, (toggle_overlay, update_overlay).chain());
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.6)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        Visibility::Hidden,
        ZIndex(500),
    ));
}

/// Toggle the overlay with F1
fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut overlay: Query<&mut Visibility, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }
    state.show_info = !state.show_info;
    for mut visibility in &mut overlay {
        *visibility = if state.show_info {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn update_overlay(
    time: Res<Time>,
    state: Res<DebugState>,
    tuning: Res<MovementTuning>,
    player: Query<(&MovementState, &LinearVelocity), With<Player>>,
    mut overlay: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !state.show_info {
        return;
    }
    let Ok((movement, velocity)) = player.single() else {
        return;
    };

    let now = time.elapsed_secs();
    let grace_left = (tuning.jump_grace_period - (now - movement.grounded_time)).max(0.0);

    for mut text in &mut overlay {
        text.0 = format!(
            "grounded: {}\ngrace left: {grace_left:.2}s\nvel: ({:.1}, {:.1})",
            movement.grounded, velocity.x, velocity.y
        );
    }
}
