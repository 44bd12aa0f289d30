use bevy::prelude::*;
use bevy::ui::Node;

use crate::app::state::AppState;
use crate::components::{Health, Player, SessionScoped};
use crate::difficulty::Difficulty;
use crate::score::Score;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_hud)
            .add_systems(Update, update_hud.run_if(in_state(AppState::Playing)));
    }
}

#[derive(Component)]
struct HudText;

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        HudText,
        SessionScoped,
        Text::new("..."),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

fn update_hud(
    time: Res<Time>,
    score: Res<Score>,
    difficulty: Res<Difficulty>,
    q_health: Query<&Health, With<Player>>,
    mut q_text: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    let dt = time.delta_secs();
    let fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
    let health = q_health.single().map(|h| h.0).unwrap_or(0);
    let line = format!(
        "FPS: {fps:.1}  Health: {health}  Time: {:.1}s  Dodged: {}  Difficulty: {}",
        score.elapsed_secs,
        score.dodged,
        difficulty.level()
    );
    if text.as_str() != line {
        *text = Text::new(line);
    }
}
