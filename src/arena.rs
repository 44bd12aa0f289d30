use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::components::{Ground, SessionScoped};
use crate::config::GameConfig;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_ground);
    }
}

fn spawn_ground(mut commands: Commands, cfg: Res<GameConfig>) {
    let ppm = cfg.physics.pixels_per_meter;
    let half_w = cfg.arena.ground_half_width * ppm;
    let half_h = cfg.arena.ground_half_height * ppm;

    commands.spawn((
        Ground,
        SessionScoped,
        Sprite::from_color(Color::srgb(0.35, 0.3, 0.25), Vec2::new(half_w * 2.0, half_h * 2.0)),
        Transform::from_xyz(0.0, cfg.arena.ground_y * ppm, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(half_w, half_h),
    ));
}
