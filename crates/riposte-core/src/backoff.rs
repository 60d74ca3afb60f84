//! Exponential backoff policy for the fallback controller.
//!
//! A pure mapping from attempt count to wait duration; the policy never
//! sleeps itself, which keeps it trivially testable. The controller applies
//! the delay whenever a retry pass has exhausted the model list for the
//! current transport client.

use std::time::Duration;

/// Backoff configuration: `base * multiplier^attempt`, capped at `max_delay`.
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    base: Duration,
    multiplier: f64,
    max_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            base: Duration::from_secs(2),
            multiplier: 2.0,
            max_delay: Duration::from_secs(60),
        }
    }
}

impl BackoffPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_base(mut self, base: Duration) -> Self {
        self.base = base;
        self
    }

    pub const fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub const fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Delay to apply after `attempt` failed attempts.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let millis = self.base.as_millis() as f64 * self.multiplier.powi(attempt as i32);
        Duration::from_millis(millis as u64).min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_per_attempt() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.delay_for(0), Duration::from_secs(2));
        assert_eq!(policy.delay_for(1), Duration::from_secs(4));
        assert_eq!(policy.delay_for(2), Duration::from_secs(8));
        assert_eq!(policy.delay_for(4), Duration::from_secs(32));
    }

    #[test]
    fn caps_at_max_delay() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.delay_for(10), Duration::from_secs(60));
    }

    #[test]
    fn custom_base_and_multiplier() {
        let policy = BackoffPolicy::new()
            .with_base(Duration::from_millis(100))
            .with_multiplier(3.0);
        assert_eq!(policy.delay_for(2), Duration::from_millis(900));
    }
}
