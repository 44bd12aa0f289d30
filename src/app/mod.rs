pub mod game_over;
pub mod menu;
pub mod state;
