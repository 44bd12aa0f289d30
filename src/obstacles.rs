use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::app::state::AppState;
use crate::components::{Obstacle, SessionScoped};
use crate::config::{GameConfig, ObstacleConfig, PlayerConfig};
use crate::cooldown::CooldownTimer;
use crate::difficulty::Difficulty;
use crate::score::Score;

/// One cooldown per gameplay session; reinitialized on every session start.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct SpawnTimer(pub CooldownTimer);

pub struct ObstaclePlugin;

impl Plugin for ObstaclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnTimer>()
            .add_systems(OnEnter(AppState::Playing), configure_spawn_timer)
            .add_systems(
                Update,
                (spawn_obstacles, drift_obstacles, cleanup_obstacles)
                    .chain()
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

fn configure_spawn_timer(mut timer: ResMut<SpawnTimer>, cfg: Res<GameConfig>) {
    timer.0 = CooldownTimer::from_seconds(cfg.obstacles.spawn_interval);
}

/// Spawn position in world units: a fixed horizontal offset from the player's
/// start, at one of the two configured heights chosen uniformly.
pub fn obstacle_spawn_point(
    rng: &mut impl Rng,
    oc: &ObstacleConfig,
    pc: &PlayerConfig,
) -> Vec2 {
    let y = if rng.gen_bool(0.5) {
        oc.spawn_height_low
    } else {
        oc.spawn_height_high
    };
    Vec2::new(pc.start_x + oc.spawn_offset_x, y)
}

pub fn spawn_obstacles(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<SpawnTimer>,
    cfg: Res<GameConfig>,
) {
    if !timer.advance(time.delta_secs()) {
        return;
    }

    let mut rng = rand::thread_rng();
    let point = obstacle_spawn_point(&mut rng, &cfg.obstacles, &cfg.player);
    let ppm = cfg.physics.pixels_per_meter;
    let half = cfg.obstacles.half_extent * ppm;

    commands.spawn((
        Obstacle,
        SessionScoped,
        Sprite::from_color(Color::srgb(0.85, 0.2, 0.2), Vec2::splat(half * 2.0)),
        Transform::from_xyz(point.x * ppm, point.y * ppm, 0.0),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(half, half),
        ActiveEvents::COLLISION_EVENTS,
    ));
}

pub fn drift_obstacles(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    difficulty: Res<Difficulty>,
    mut q_obstacles: Query<&mut Transform, With<Obstacle>>,
) {
    let speed = difficulty.drift_speed(cfg.obstacles.base_drift_speed)
        * cfg.physics.pixels_per_meter;
    let dt = time.delta_secs();
    for mut tf in &mut q_obstacles {
        tf.translation.x -= speed * dt;
    }
}

pub fn cleanup_obstacles(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut score: ResMut<Score>,
    q_obstacles: Query<(Entity, &Transform), With<Obstacle>>,
) {
    let kill_x = cfg.obstacles.kill_x * cfg.physics.pixels_per_meter;
    for (e, tf) in &q_obstacles {
        if tf.translation.x < kill_x {
            commands.entity(e).despawn();
            score.dodged += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_point_uses_fixed_offset_and_discrete_heights() {
        let oc = ObstacleConfig::default();
        let pc = PlayerConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut saw_low = false;
        let mut saw_high = false;
        for _ in 0..64 {
            let p = obstacle_spawn_point(&mut rng, &oc, &pc);
            assert_eq!(p.x, 10.0);
            assert!(p.y == oc.spawn_height_low || p.y == oc.spawn_height_high);
            saw_low |= p.y == oc.spawn_height_low;
            saw_high |= p.y == oc.spawn_height_high;
        }
        assert!(saw_low && saw_high, "both heights should occur");
    }

    #[test]
    fn spawn_point_tracks_player_start() {
        let oc = ObstacleConfig::default();
        let pc = PlayerConfig {
            start_x: -3.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(obstacle_spawn_point(&mut rng, &oc, &pc).x, 7.0);
    }
}
