use bevy::prelude::*;

use crate::app::state::AppState;

/// Running tally for one gameplay session: time survived plus obstacles that
/// drifted past the kill line without touching the player.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct Score {
    pub elapsed_secs: f32,
    pub dodged: u32,
}

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_systems(OnEnter(AppState::Playing), reset_score)
            .add_systems(
                Update,
                tick_score.run_if(in_state(AppState::Playing)),
            );
    }
}

fn reset_score(mut score: ResMut<Score>) {
    *score = Score::default();
}

pub fn tick_score(time: Res<Time>, mut score: ResMut<Score>) {
    score.elapsed_secs += time.delta_secs();
}
