pub mod app;
pub mod arena;
pub mod audio;
pub mod camera;
pub mod components;
pub mod config;
pub mod cooldown;
pub mod difficulty;
pub mod game;
pub mod hud;
pub mod obstacles;
pub mod physics;
pub mod player;
pub mod score;

// Curated re-exports
pub use app::state::AppState;
pub use config::GameConfig;
pub use cooldown::CooldownTimer;
pub use difficulty::Difficulty;
pub use game::GamePlugin;
pub use score::Score;
