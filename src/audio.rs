use bevy::prelude::*;

use crate::app::state::AppState;
use crate::components::SessionScoped;
use crate::config::GameConfig;
use crate::physics::PlayerHit;
use crate::player::PlayerJumped;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), start_music)
            .add_systems(
                Update,
                (play_jump_sfx, play_hit_sfx).run_if(in_state(AppState::Playing)),
            );
    }
}

#[derive(Component)]
struct MusicPlayer;

// The music entity is session scoped; despawning it on exit stops playback.
fn start_music(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    if !cfg.audio.enabled {
        return;
    }
    commands.spawn((
        MusicPlayer,
        SessionScoped,
        AudioPlayer::new(asset_server.load(cfg.audio.music.clone())),
        PlaybackSettings::LOOP,
    ));
}

fn play_jump_sfx(
    mut commands: Commands,
    mut jumps: EventReader<PlayerJumped>,
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
) {
    let jumped = !jumps.is_empty();
    jumps.clear();
    if !jumped || !cfg.audio.enabled {
        return;
    }
    commands.spawn((
        AudioPlayer::new(asset_server.load(cfg.audio.jump_sfx.clone())),
        PlaybackSettings::DESPAWN,
    ));
}

fn play_hit_sfx(
    mut commands: Commands,
    mut hits: EventReader<PlayerHit>,
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
) {
    let hit = !hits.is_empty();
    hits.clear();
    if !hit || !cfg.audio.enabled {
        return;
    }
    commands.spawn((
        AudioPlayer::new(asset_server.load(cfg.audio.hit_sfx.clone())),
        PlaybackSettings::DESPAWN,
    ));
}
