use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node};

use super::state::AppState;
use crate::config::GameConfig;
use crate::difficulty::Difficulty;

pub struct FrontendPlugin;

impl Plugin for FrontendPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::Frontend),
            (reset_difficulty, show_menu_instructions, spawn_menu_ui),
        )
        .add_systems(
            Update,
            (handle_menu_input, refresh_difficulty_text)
                .run_if(in_state(AppState::Frontend)),
        )
        .add_systems(OnExit(AppState::Frontend), despawn_menu_ui);
    }
}

fn reset_difficulty(mut difficulty: ResMut<Difficulty>) {
    difficulty.reset_to_base();
}

fn show_menu_instructions(difficulty: Res<Difficulty>) {
    info!(target: "menu", "=== BLOCK RUNNER ===");
    info!(target: "menu", "Enter/Space: start  Left/Right: difficulty (currently {})", difficulty.level());
}

pub fn handle_menu_input(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut difficulty: ResMut<Difficulty>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Enter) || keys.just_pressed(KeyCode::Space) {
        info!(target: "menu", "Starting session at difficulty {}", difficulty.level());
        next_state.set(AppState::Playing);
        return;
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        difficulty.adjust(-1, cfg.difficulty.min, cfg.difficulty.max);
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        difficulty.adjust(1, cfg.difficulty.min, cfg.difficulty.max);
    }
}

// === UI IMPLEMENTATION ===

#[derive(Component)]
struct MenuUiRoot;
#[derive(Component)]
struct MenuDifficultyText;

fn spawn_menu_ui(mut commands: Commands, difficulty: Res<Difficulty>) {
    let root = commands
        .spawn((
            MenuUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.05, 0.85)),
        ))
        .id();

    commands.entity(root).with_children(|p| {
        p.spawn(Text::new("BLOCK RUNNER"));
        p.spawn(Text::new("Press Enter to start"));
        p.spawn((
            MenuDifficultyText,
            Text::new(difficulty_line(difficulty.level())),
        ));
    });
}

fn refresh_difficulty_text(
    difficulty: Res<Difficulty>,
    mut q_text: Query<&mut Text, With<MenuDifficultyText>>,
) {
    if !difficulty.is_changed() {
        return;
    }
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    *text = Text::new(difficulty_line(difficulty.level()));
}

fn difficulty_line(level: i32) -> String {
    format!("Difficulty (1 is easiest, Left/Right to change): {level}")
}

fn despawn_menu_ui(mut commands: Commands, q_root: Query<Entity, With<MenuUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
