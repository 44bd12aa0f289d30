use bevy::prelude::*;

/// Difficulty scalar. The menu adjusts the base level between sessions;
/// active play ramps the effective level up from that base. Obstacle drift
/// speed scales linearly with the effective level.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    base: i32,
    level: i32,
    fraction: f32,
}

impl Difficulty {
    pub fn new(start: i32) -> Self {
        Self {
            base: start,
            level: start,
            fraction: 0.0,
        }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    /// Menu adjustment: shifts the base level, clamped to `[min, max]`, and
    /// makes it the effective level.
    pub fn adjust(&mut self, delta: i32, min: i32, max: i32) {
        self.base = (self.base + delta).clamp(min, max);
        self.level = self.base;
        self.fraction = 0.0;
    }

    /// In-session ramp: accumulates fractional level progress, promoting to
    /// the next level once a whole unit is reached, capped at `max`.
    pub fn ramp(&mut self, amount: f32, max: i32) {
        self.fraction += amount;
        while self.fraction >= 1.0 {
            self.fraction -= 1.0;
            if self.level < max {
                self.level += 1;
            }
        }
    }

    /// Discards in-session ramping, returning to the menu-chosen base.
    pub fn reset_to_base(&mut self) {
        self.level = self.base;
        self.fraction = 0.0;
    }

    pub fn drift_speed(&self, base_speed: f32) -> f32 {
        base_speed * self.level as f32
    }
}
