//! Fixed-period timers
//!
//! The frontend feeds elapsed wall time into a [`Ticker`] and acts once per
//! whole period that fired. The remainder carries over to the next call.

use core::time::Duration;

/// Accumulator for one fixed-period timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
    elapsed: Duration,
}

impl Ticker {
    /// A zero period is bumped to one millisecond
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add `dt` and return how many periods completed
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    /// Time left until the next period completes
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }

    /// Drop any partial period
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_carries_remainder() {
        let mut ticker = Ticker::from_millis(150);
        assert_eq!(ticker.advance(Duration::from_millis(100)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(100)), 1);
        assert_eq!(ticker.remaining(), Duration::from_millis(100));
        assert_eq!(ticker.advance(Duration::from_millis(400)), 3);
    }

    #[test]
    fn test_reset_drops_partial_period() {
        let mut ticker = Ticker::from_millis(600);
        ticker.advance(Duration::from_millis(599));
        ticker.reset();
        assert_eq!(ticker.advance(Duration::from_millis(1)), 0);
        assert_eq!(ticker.remaining(), Duration::from_millis(599));
    }

    #[test]
    fn test_zero_period_clamped() {
        let mut ticker = Ticker::new(Duration::ZERO);
        assert_eq!(ticker.period(), Duration::from_millis(1));
        assert_eq!(ticker.advance(Duration::from_millis(3)), 3);
    }
}
