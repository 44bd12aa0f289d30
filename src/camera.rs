use bevy::prelude::*;

use crate::config::GameConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    // Side-on view biased to the right so the spawn line is on screen.
    let ppm = cfg.physics.pixels_per_meter;
    commands.spawn((
        Camera2d,
        Transform::from_xyz(4.0 * ppm, 2.0 * ppm, 0.0),
    ));
}
