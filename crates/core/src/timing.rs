//! Gravity and lock-delay accumulators.
//!
//! Time is supplied by the caller as `Duration` deltas; nothing here reads a
//! clock. Gravity progress is a fractional row count, the lock timer measures
//! how long the piece has been grounded since its last reset.

use std::time::Duration;

use crate::types::LOCK_DELAY_MS;

/// Lock delay as a `Duration`.
pub const LOCK_DELAY: Duration = Duration::from_millis(LOCK_DELAY_MS);

#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    gravity_accumulator: f64,
    lock_timer: Duration,
    lock_resets: u32,
}

impl Timing {
    pub fn new() -> Self {
        Self {
            gravity_accumulator: 0.0,
            lock_timer: Duration::ZERO,
            lock_resets: 0,
        }
    }

    /// Add `dt * speed` rows of fall progress.
    pub fn accumulate(&mut self, dt: Duration, rows_per_sec: f64) {
        self.gravity_accumulator += dt.as_secs_f64() * rows_per_sec;
    }

    /// Consume one whole row of progress if available.
    pub fn take_gravity_step(&mut self) -> bool {
        if self.gravity_accumulator >= 1.0 {
            self.gravity_accumulator -= 1.0;
            true
        } else {
            false
        }
    }

    /// Grounded for `dt` more; returns true once the lock delay has run out.
    pub fn touchdown(&mut self, dt: Duration) -> bool {
        self.lock_timer += dt;
        self.lock_timer >= LOCK_DELAY
    }

    /// Movement grants a fresh lock window.
    pub fn reset_lock_delay(&mut self) {
        self.lock_timer = Duration::ZERO;
    }

    /// Rotation grants a fresh lock window and counts as a reset. The count is
    /// not capped.
    pub fn register_lock_reset(&mut self) {
        self.lock_resets = self.lock_resets.saturating_add(1);
        self.lock_timer = Duration::ZERO;
    }

    /// New piece: fresh lock window and reset count. Gravity progress carries over.
    pub fn on_spawn(&mut self) {
        self.lock_timer = Duration::ZERO;
        self.lock_resets = 0;
    }

    pub fn gravity_accumulator(&self) -> f64 {
        self.gravity_accumulator
    }

    pub fn lock_timer(&self) -> Duration {
        self.lock_timer
    }

    pub fn lock_resets(&self) -> u32 {
        self.lock_resets
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_yields_whole_rows() {
        let mut t = Timing::new();
        t.accumulate(Duration::from_millis(500), 5.0);
        let mut steps = 0;
        while t.take_gravity_step() {
            steps += 1;
        }
        assert_eq!(steps, 2);
        assert!((t.gravity_accumulator() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn touchdown_expires_at_threshold() {
        let mut t = Timing::new();
        assert!(!t.touchdown(Duration::from_millis(499)));
        assert!(t.touchdown(Duration::from_millis(1)));
    }

    #[test]
    fn resets_clear_timer() {
        let mut t = Timing::new();
        t.touchdown(Duration::from_millis(300));
        t.register_lock_reset();
        assert_eq!(t.lock_timer(), Duration::ZERO);
        assert_eq!(t.lock_resets(), 1);

        t.touchdown(Duration::from_millis(300));
        t.reset_lock_delay();
        assert_eq!(t.lock_timer(), Duration::ZERO);
        assert_eq!(t.lock_resets(), 1);

        t.on_spawn();
        assert_eq!(t.lock_resets(), 0);
    }
}
