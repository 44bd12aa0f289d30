use bevy::prelude::*;
use clap::Parser;

use block_runner::config::GameConfig;
use block_runner::game::GamePlugin;

#[derive(Parser, Debug)]
#[command(name = "block_runner", about = "Side-scrolling obstacle jumper")]
struct Cli {
    /// Path to the RON configuration file.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: String,
}

fn main() {
    let cli = Cli::parse();
    // Load configuration (fall back to defaults if missing)
    let (cfg, load_err) = GameConfig::load_or_default(&cli.config);
    if let Some(err) = load_err {
        eprintln!("config {}: {err}; using defaults", cli.config);
    }

    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .insert_resource(cfg)
        .add_plugins(GamePlugin)
        .run();
}
