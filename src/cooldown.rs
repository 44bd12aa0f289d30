/// Repeating cooldown over accumulated frame time.
///
/// The owner feeds it per-frame deltas; it reports `true` once per configured
/// interval and snaps its accumulator back to exactly zero, discarding any
/// overshoot past the threshold. Consecutive fires are therefore spaced *at
/// least* `interval` apart, not exactly periodically. A single `advance` call
/// fires at most once no matter how large the step is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CooldownTimer {
    interval: f32,
    elapsed: f32,
}

impl CooldownTimer {
    pub fn from_seconds(interval_secs: f32) -> Self {
        Self {
            interval: interval_secs,
            elapsed: 0.0,
        }
    }

    /// Sets the firing threshold. Not validated: a zero or negative interval
    /// makes the timer fire on (almost) every `advance` call. Does not touch
    /// the accumulator.
    pub fn configure(&mut self, interval_secs: f32) {
        self.interval = interval_secs;
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Adds `delta_secs` to the accumulator. Returns `true` and resets the
    /// accumulator to zero once it has reached or exceeded the interval
    /// (threshold inclusive), otherwise `false`.
    ///
    /// Negative deltas are accepted arithmetically and simply push the next
    /// fire further out; feeding sensible values is the caller's job.
    pub fn advance(&mut self, delta_secs: f32) -> bool {
        self.elapsed += delta_secs;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_and_fires_once_per_interval() {
        let mut t = CooldownTimer::from_seconds(1.0);
        assert!(!t.advance(0.5));
        assert!(t.advance(0.5));
        assert!(!t.advance(0.5));
        assert!(t.advance(0.6));
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut t = CooldownTimer::from_seconds(1.0);
        assert!(!t.advance(0.25));
        assert!(t.advance(0.75), "exact threshold must fire");
        assert_eq!(t.elapsed(), 0.0);
    }

    #[test]
    fn overshoot_is_dropped_not_carried() {
        let mut t = CooldownTimer::from_seconds(1.0);
        assert!(t.advance(2.5), "single fire despite overshoot");
        assert_eq!(t.elapsed(), 0.0, "accumulator snaps to zero, not 1.5");
        // The dropped 1.5s does not shorten the next interval.
        assert!(!t.advance(0.9));
        assert!(t.advance(0.1));
    }

    #[test]
    fn fire_count_matches_floor_of_total_over_interval() {
        // Steps no larger than the interval: fires == floor(S / I).
        let mut t = CooldownTimer::from_seconds(1.0);
        let mut fires = 0u32;
        for _ in 0..100 {
            if t.advance(0.1) {
                fires += 1;
            }
        }
        assert_eq!(fires, 10);

        let mut t = CooldownTimer::from_seconds(0.75);
        let mut fires = 0u32;
        let mut total = 0.0f32;
        for _ in 0..40 {
            total += 0.25;
            if t.advance(0.25) {
                fires += 1;
            }
        }
        assert_eq!(fires, (total / 0.75).floor() as u32);
    }

    #[test]
    fn configure_is_idempotent_before_first_advance() {
        let mut a = CooldownTimer::default();
        a.configure(2.0);
        let mut b = CooldownTimer::default();
        b.configure(2.0);
        b.configure(2.0);
        b.configure(2.0);
        for step in [0.5, 1.0, 0.5, 0.7, 1.3] {
            assert_eq!(a.advance(step), b.advance(step));
        }
    }

    #[test]
    fn reconfigure_keeps_accumulated_time() {
        let mut t = CooldownTimer::from_seconds(10.0);
        assert!(!t.advance(0.9));
        t.configure(1.0);
        // Already accumulated 0.9; next small step crosses the new threshold.
        assert!(t.advance(0.1));
    }

    #[test]
    fn zero_interval_fires_every_call() {
        let mut t = CooldownTimer::from_seconds(0.0);
        assert!(t.advance(0.0));
        assert!(t.advance(0.016));
        assert!(t.advance(0.016));
    }

    #[test]
    fn negative_delta_delays_firing() {
        let mut t = CooldownTimer::from_seconds(1.0);
        assert!(!t.advance(0.8));
        assert!(!t.advance(-0.5));
        assert!(!t.advance(0.5));
        assert!(t.advance(0.2));
    }
}
