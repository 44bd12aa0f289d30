use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::components::{Health, Obstacle, Player};
use crate::config::GameConfig;

/// Fired once per player/obstacle contact, after health has been decremented.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerHit {
    pub remaining: i32,
}

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier for the arena

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let ppm = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.physics.pixels_per_meter)
            .unwrap_or(50.0);
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(ppm))
            .add_event::<PlayerHit>()
            .add_systems(Startup, configure_gravity)
            .add_systems(
                Update,
                handle_contacts.run_if(in_state(AppState::Playing)),
            );
        #[cfg(feature = "debug")]
        app.add_plugins(RapierDebugRenderPlugin::default());
    }
}

// RapierConfiguration lives on the rapier context entity, so it is queried as
// a component rather than taken as ResMut.
fn configure_gravity(mut q_cfg: Query<&mut RapierConfiguration>, game_cfg: Res<GameConfig>) {
    if let Ok(mut cfg) = q_cfg.single_mut() {
        cfg.gravity = Vect::new(
            0.0,
            game_cfg.physics.gravity_y * game_cfg.physics.pixels_per_meter,
        );
    }
}

/// Collision response: the body pair is resolved to entity kinds through the
/// marker components, never through physics user data. A player/obstacle
/// contact costs one health and consumes the obstacle; at zero health the
/// session ends.
pub fn handle_contacts(
    mut collisions: EventReader<CollisionEvent>,
    mut commands: Commands,
    mut q_player: Query<&mut Health, With<Player>>,
    q_obstacles: Query<(), With<Obstacle>>,
    mut hits: EventWriter<PlayerHit>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for ev in collisions.read() {
        let CollisionEvent::Started(a, b, _flags) = ev else {
            continue;
        };
        let (player_entity, other) = if q_player.contains(*a) {
            (*a, *b)
        } else if q_player.contains(*b) {
            (*b, *a)
        } else {
            continue;
        };
        if !q_obstacles.contains(other) {
            continue;
        }
        let Ok(mut health) = q_player.get_mut(player_entity) else {
            continue;
        };
        health.0 -= 1;
        commands.entity(other).despawn();
        info!(target: "physics", "Player hit; {} health remaining", health.0);
        hits.write(PlayerHit {
            remaining: health.0,
        });
        if health.0 <= 0 {
            next_state.set(AppState::GameOver);
        }
    }
}
