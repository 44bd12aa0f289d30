use bevy::prelude::*;

/// High-level app lifecycle state.
/// Frontend -> Playing -> GameOver -> Frontend
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Main menu: start prompt + difficulty selection.
    #[default]
    Frontend,
    /// Active side-scrolling gameplay session.
    Playing,
    /// End screen showing the final score.
    GameOver,
}
