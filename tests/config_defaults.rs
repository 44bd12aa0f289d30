use block_runner::config::GameConfig;

#[test]
fn default_spawn_constants_match_the_tuned_game() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.obstacles.spawn_interval, 1.0);
    assert_eq!(cfg.obstacles.spawn_offset_x, 10.0);
    assert_eq!(cfg.obstacles.spawn_height_low, -1.0);
    assert_eq!(cfg.obstacles.spawn_height_high, 5.0);
}

#[test]
fn default_difficulty_starts_at_easiest() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.difficulty.start, cfg.difficulty.min);
    assert!(cfg.difficulty.max > cfg.difficulty.min);
    assert!(cfg.difficulty.ramp_per_second >= 0.0);
}

#[test]
fn shipped_config_parses_and_passes_validation() {
    let cfg =
        GameConfig::load_from_file("assets/config/game.ron").expect("shipped config must parse");
    assert!(
        cfg.validate().is_empty(),
        "shipped config should not produce warnings: {:?}",
        cfg.validate()
    );
    // The shipped file mirrors the compiled-in defaults.
    assert_eq!(cfg, GameConfig::default());
}
