use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node};

use super::state::AppState;
use crate::score::Score;

pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::GameOver), spawn_game_over_ui)
            .add_systems(
                Update,
                handle_game_over_input.run_if(in_state(AppState::GameOver)),
            )
            .add_systems(OnExit(AppState::GameOver), despawn_game_over_ui);
    }
}

#[derive(Component)]
struct GameOverUiRoot;

fn spawn_game_over_ui(mut commands: Commands, score: Res<Score>) {
    info!(
        target: "game_over",
        "Session over: {:.1}s survived, {} dodged",
        score.elapsed_secs, score.dodged
    );

    let root = commands
        .spawn((
            GameOverUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.0, 0.0, 0.85)),
        ))
        .id();

    commands.entity(root).with_children(|p| {
        p.spawn(Text::new("GAME OVER"));
        p.spawn(Text::new(format!(
            "Survived {:.1}s, dodged {} obstacles",
            score.elapsed_secs, score.dodged
        )));
        p.spawn(Text::new("Press Enter to continue"));
    });
}

pub fn handle_game_over_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Enter) || keys.just_pressed(KeyCode::Space) {
        next_state.set(AppState::Frontend);
    }
}

fn despawn_game_over_ui(mut commands: Commands, q_root: Query<Entity, With<GameOverUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
