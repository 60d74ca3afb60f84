//! Delivery pacing for extracted records.
//!
//! One chunk can complete several records at once; a downstream UI wants a
//! steady trickle, not a burst. [`Pacer`] lets the first record through
//! untouched and then holds each subsequent delivery until at least the
//! configured gap has passed since the previous one. Extraction itself keeps
//! running at transport speed; only delivery waits, and a stalled remote
//! stream still terminates by timeout or EOF regardless of pacing.

use std::time::Duration;

use tokio::time::Instant;

/// Minimum gap between two delivered records.
pub const DEFAULT_RECORD_GAP: Duration = Duration::from_millis(800);

/// Per-stream pacing state. One instance per streaming session.
#[derive(Debug)]
pub struct Pacer {
    gap: Duration,
    not_before: Option<Instant>,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_GAP)
    }
}

impl Pacer {
    pub fn new(gap: Duration) -> Self {
        Self { gap, not_before: None }
    }

    /// Wait until the next record may be delivered, then re-arm the gap.
    ///
    /// Returns immediately for the first record of a session, and whenever
    /// extraction was already slower than the configured cadence.
    pub async fn ready(&mut self) {
        if let Some(at) = self.not_before {
            tokio::time::sleep_until(at).await;
        }
        self.not_before = Some(Instant::now() + self.gap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_record_passes_immediately() {
        let mut pacer = Pacer::default();
        let start = Instant::now();
        pacer.ready().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn burst_is_spread_to_the_cadence() {
        let mut pacer = Pacer::new(Duration::from_millis(800));
        let start = Instant::now();
        pacer.ready().await;
        pacer.ready().await;
        pacer.ready().await;
        assert_eq!(start.elapsed(), Duration::from_millis(1600));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_extraction_is_not_delayed_further() {
        let mut pacer = Pacer::new(Duration::from_millis(800));
        pacer.ready().await;
        tokio::time::advance(Duration::from_secs(5)).await;

        let start = Instant::now();
        pacer.ready().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
