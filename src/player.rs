use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::components::{Health, Player, SessionScoped};
use crate::config::GameConfig;

/// Fired when the player leaves the ground (used for the jump sound).
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerJumped;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerJumped>()
            .add_systems(OnEnter(AppState::Playing), spawn_player)
            .add_systems(
                Update,
                (player_input, return_to_menu).run_if(in_state(AppState::Playing)),
            );
    }
}

fn spawn_player(mut commands: Commands, cfg: Res<GameConfig>) {
    let ppm = cfg.physics.pixels_per_meter;
    let p = &cfg.player;
    let half = p.half_extent * ppm;

    commands.spawn((
        Player,
        Health(p.health),
        SessionScoped,
        Sprite::from_color(Color::srgb(0.2, 0.85, 0.3), Vec2::splat(half * 2.0)),
        Transform::from_xyz(p.start_x * ppm, p.start_y * ppm, 0.0),
        RigidBody::Dynamic,
        Collider::cuboid(half, half),
        LockedAxes::ROTATION_LOCKED,
        Velocity::zero(),
        ExternalImpulse::default(),
        ActiveEvents::COLLISION_EVENTS,
    ));
}

pub fn player_input(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut q_player: Query<(&mut Velocity, &mut ExternalImpulse), With<Player>>,
    mut jumps: EventWriter<PlayerJumped>,
) {
    let Ok((mut vel, mut impulse)) = q_player.single_mut() else {
        return;
    };
    let ppm = cfg.physics.pixels_per_meter;

    let mut dir = 0.0;
    if keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA) {
        dir -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD) {
        dir += 1.0;
    }
    vel.linvel.x = dir * cfg.player.move_speed * ppm;

    // Grounded check by vertical speed; good enough without a ground sensor.
    let airborne = vel.linvel.y.abs() > 1.0;
    if !airborne && (keys.just_pressed(KeyCode::ArrowUp) || keys.just_pressed(KeyCode::Space)) {
        impulse.impulse = Vec2::new(0.0, cfg.player.jump_impulse * ppm);
        jumps.write(PlayerJumped);
    }
}

fn return_to_menu(keys: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<AppState>>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!(target: "player", "Session aborted, returning to menu");
        next_state.set(AppState::Frontend);
    }
}
