use bevy::prelude::*;

use crate::app::game_over::GameOverPlugin;
use crate::app::menu::FrontendPlugin;
use crate::app::state::AppState;
use crate::arena::ArenaPlugin;
use crate::audio::GameAudioPlugin;
use crate::camera::CameraPlugin;
use crate::components::SessionScoped;
use crate::config::GameConfig;
use crate::difficulty::Difficulty;
use crate::hud::HudPlugin;
use crate::obstacles::ObstaclePlugin;
use crate::physics::PhysicsSetupPlugin;
use crate::player::PlayerPlugin;
use crate::score::ScorePlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_plugins((
                CameraPlugin,
                PhysicsSetupPlugin,
                FrontendPlugin,
                ArenaPlugin,
                PlayerPlugin,
                ObstaclePlugin,
                ScorePlugin,
                HudPlugin,
                GameAudioPlugin,
                GameOverPlugin,
            ))
            .add_systems(Startup, (init_difficulty, log_config_warnings))
            .add_systems(
                Update,
                ramp_difficulty.run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnExit(AppState::Playing), despawn_session);
    }
}

fn init_difficulty(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(Difficulty::new(cfg.difficulty.start));
}

fn log_config_warnings(cfg: Res<GameConfig>) {
    for warning in cfg.validate() {
        warn!(target: "config", "{warning}");
    }
}

pub fn ramp_difficulty(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut difficulty: ResMut<Difficulty>,
) {
    difficulty.ramp(
        time.delta_secs() * cfg.difficulty.ramp_per_second,
        cfg.difficulty.max,
    );
}

/// Scoped ownership: every entity a session spawned (player, obstacles,
/// ground, HUD, music) is torn down when the session ends, however it ends.
fn despawn_session(mut commands: Commands, q_session: Query<Entity, With<SessionScoped>>) {
    for e in &q_session {
        commands.entity(e).despawn();
    }
}
