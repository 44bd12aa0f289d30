use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Block Runner".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in world units (meters) per second squared.
    pub gravity_y: f32,
    /// Display scale: how many pixels one world unit spans.
    pub pixels_per_meter: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: -9.81,
            pixels_per_meter: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_x: f32,
    pub start_y: f32,
    /// Half side length of the player's square collider, world units.
    pub half_extent: f32,
    /// Horizontal speed while a direction key is held, world units / s.
    pub move_speed: f32,
    /// Upward delta-v applied on jump (impulse for a unit-mass body).
    pub jump_impulse: f32,
    /// Obstacle touches survivable before the session ends.
    pub health: i32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            start_y: 1.0,
            half_extent: 0.5,
            move_speed: 5.0,
            jump_impulse: 10.0,
            health: 3,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ObstacleConfig {
    /// Seconds between obstacle spawns (cooldown interval).
    pub spawn_interval: f32,
    /// Horizontal spawn offset from the player's start position.
    pub spawn_offset_x: f32,
    /// The two discrete spawn heights, chosen uniformly.
    pub spawn_height_low: f32,
    pub spawn_height_high: f32,
    /// Half side length of the obstacle collider, world units.
    pub half_extent: f32,
    /// Leftward drift speed at difficulty level 1, world units / s.
    pub base_drift_speed: f32,
    /// Obstacles past this x coordinate are despawned (and count as dodged).
    pub kill_x: f32,
}
impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            spawn_interval: 1.0,
            spawn_offset_x: 10.0,
            spawn_height_low: -1.0,
            spawn_height_high: 5.0,
            half_extent: 0.5,
            base_drift_speed: 6.0,
            kill_x: -12.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DifficultyConfig {
    pub start: i32,
    pub min: i32,
    pub max: i32,
    /// Levels gained per second of active play (fractional progress kept).
    pub ramp_per_second: f32,
}
impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            start: 1,
            min: 1,
            max: 9,
            ramp_per_second: 0.05,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub ground_y: f32,
    pub ground_half_width: f32,
    pub ground_half_height: f32,
}
impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            ground_y: -0.2,
            ground_half_width: 50.0,
            ground_half_height: 0.1,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub music: String,
    pub jump_sfx: String,
    pub hit_sfx: String,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            music: "audio/music.ogg".into(),
            jump_sfx: "audio/jump.ogg".into(),
            hit_sfx: "audio/hit.ogg".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub obstacles: ObstacleConfig,
    pub difficulty: DifficultyConfig,
    pub arena: ArenaConfig,
    pub audio: AudioConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration returning a list of human-readable warning
    /// strings. These represent suspicious / potentially unintended values but
    /// are not hard errors. Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.physics.gravity_y > 0.0 {
            w.push(format!(
                "physics.gravity_y is positive ({}); typical configs use negative for downward",
                self.physics.gravity_y
            ));
        }
        if self.player.half_extent <= 0.0 {
            w.push("player.half_extent must be > 0".into());
        }
        if self.player.move_speed < 0.0 {
            w.push("player.move_speed negative".into());
        }
        if self.player.jump_impulse <= 0.0 {
            w.push("player.jump_impulse not positive; player cannot jump".into());
        }
        if self.player.health <= 0 {
            w.push(format!(
                "player.health {} not positive; session ends on first contact",
                self.player.health
            ));
        }
        if self.obstacles.spawn_interval <= 0.0 {
            w.push(format!(
                "obstacles.spawn_interval {} not positive; an obstacle spawns every frame",
                self.obstacles.spawn_interval
            ));
        }
        if self.obstacles.half_extent <= 0.0 {
            w.push("obstacles.half_extent must be > 0".into());
        }
        if self.obstacles.base_drift_speed <= 0.0 {
            w.push("obstacles.base_drift_speed not positive; obstacles never approach".into());
        }
        if self.obstacles.kill_x >= self.player.start_x + self.obstacles.spawn_offset_x {
            w.push(format!(
                "obstacles.kill_x {} is at or past the spawn line; obstacles despawn immediately",
                self.obstacles.kill_x
            ));
        }
        if (self.obstacles.spawn_height_low - self.obstacles.spawn_height_high).abs()
            < f32::EPSILON
        {
            w.push("obstacle spawn heights are equal -> zero vertical variation".into());
        }
        if self.difficulty.min > self.difficulty.max {
            w.push(format!(
                "difficulty.min ({}) greater than max ({})",
                self.difficulty.min, self.difficulty.max
            ));
        }
        if self.difficulty.start < self.difficulty.min
            || self.difficulty.start > self.difficulty.max
        {
            w.push(format!(
                "difficulty.start {} outside [{}, {}]",
                self.difficulty.start, self.difficulty.min, self.difficulty.max
            ));
        }
        if self.difficulty.ramp_per_second < 0.0 {
            w.push("difficulty.ramp_per_second negative -> difficulty decays during play".into());
        }
        if self.arena.ground_half_width <= 0.0 || self.arena.ground_half_height <= 0.0 {
            w.push("arena ground half extents must be > 0".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 800.0, height: 600.0, title: "Test"),
            physics: (gravity_y: -9.81, pixels_per_meter: 50.0),
            player: (
                start_x: 0.0,
                start_y: 1.0,
                half_extent: 0.5,
                move_speed: 4.0,
                jump_impulse: 9.0,
                health: 5,
            ),
            obstacles: (
                spawn_interval: 1.5,
                spawn_offset_x: 10.0,
                spawn_height_low: -1.0,
                spawn_height_high: 5.0,
                half_extent: 0.5,
                base_drift_speed: 6.0,
                kill_x: -12.0,
            ),
            difficulty: (start: 2, min: 1, max: 9, ramp_per_second: 0.1),
            arena: (ground_y: -0.2, ground_half_width: 50.0, ground_half_height: 0.1),
            audio: (enabled: false, music: "audio/music.ogg"),
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.player.health, 5);
        assert_eq!(cfg.obstacles.spawn_interval, 1.5);
        assert_eq!(cfg.difficulty.start, 2);
        assert!(!cfg.audio.enabled);
        // Partial sections fall back to defaults.
        assert_eq!(cfg.audio.jump_sfx, AudioConfig::default().jump_sfx);
        assert!(
            cfg.validate().is_empty(),
            "expected no validation warnings for sample config"
        );
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(GameConfig::default().validate().is_empty());
    }

    #[test]
    fn validate_detects_warnings() {
        let bad = GameConfig {
            window: WindowConfig {
                width: -100.0,
                height: 0.0,
                title: "Bad".into(),
            },
            physics: PhysicsConfig {
                gravity_y: 9.81,
                pixels_per_meter: 0.0,
            },
            player: PlayerConfig {
                half_extent: 0.0,
                move_speed: -1.0,
                jump_impulse: 0.0,
                health: 0,
                ..Default::default()
            },
            obstacles: ObstacleConfig {
                spawn_interval: 0.0,
                half_extent: -1.0,
                base_drift_speed: 0.0,
                kill_x: 20.0,
                spawn_height_low: 2.0,
                spawn_height_high: 2.0,
                ..Default::default()
            },
            difficulty: DifficultyConfig {
                start: 12,
                min: 5,
                max: 3,
                ramp_per_second: -0.1,
            },
            arena: ArenaConfig {
                ground_half_width: 0.0,
                ..Default::default()
            },
            audio: AudioConfig::default(),
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("pixels_per_meter"));
        assert!(joined.contains("gravity_y is positive"));
        assert!(joined.contains("player.health"));
        assert!(joined.contains("spawn_interval"));
        assert!(joined.contains("kill_x"));
        assert!(joined.contains("spawn heights are equal"));
        assert!(joined.contains("difficulty.min"));
        assert!(joined.contains("difficulty.start"));
        assert!(
            warnings.len() >= 12,
            "expected many warnings, got {}: {joined}",
            warnings.len()
        );
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = GameConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg.window.width, WindowConfig::default().width);
    }

    #[test]
    fn load_or_default_existing_file() {
        let sample = r"(window: (width: 640.0, height: 360.0), physics: (gravity_y: -5.0))";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let (cfg, err) = GameConfig::load_or_default(file.path());
        assert!(err.is_none());
        assert_eq!(cfg.window.width, 640.0);
        assert_eq!(cfg.physics.gravity_y, -5.0);
    }
}
