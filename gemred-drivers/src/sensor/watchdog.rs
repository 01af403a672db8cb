//! Silence watchdog
//!
//! Tracks when the gauge was last heard from. The watchdog re-arms itself
//! every time it fires, so a silent gauge trips it once per timeout period
//! rather than on every poll.

use gemred_hal::time::elapsed_ms;

/// Default silence period after which the gauge is considered lost
pub const SILENCE_TIMEOUT_MS: u32 = 3000;

/// Loss-of-contact detector
#[derive(Debug, Clone)]
pub struct SilenceWatchdog {
    /// Silence period that trips the watchdog
    timeout_ms: u32,
    /// Timestamp of the last byte received (or of the last trip)
    last_contact_ms: u32,
}

impl SilenceWatchdog {
    /// Create a watchdog armed at `now_ms`
    pub fn new(timeout_ms: u32, now_ms: u32) -> Self {
        Self {
            timeout_ms,
            last_contact_ms: now_ms,
        }
    }

    /// Record contact with the gauge
    pub fn feed(&mut self, now_ms: u32) {
        self.last_contact_ms = now_ms;
    }

    /// Check for silence
    ///
    /// Returns true if more than the timeout has passed since the last
    /// contact, and re-arms the watchdog at `now_ms` when it does.
    pub fn check(&mut self, now_ms: u32) -> bool {
        if elapsed_ms(now_ms, self.last_contact_ms) > self.timeout_ms {
            self.last_contact_ms = now_ms;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_within_timeout() {
        let mut watchdog = SilenceWatchdog::new(SILENCE_TIMEOUT_MS, 0);
        assert!(!watchdog.check(1000));
        assert!(!watchdog.check(SILENCE_TIMEOUT_MS));
    }

    #[test]
    fn test_trips_after_timeout() {
        let mut watchdog = SilenceWatchdog::new(SILENCE_TIMEOUT_MS, 0);
        assert!(watchdog.check(SILENCE_TIMEOUT_MS + 1));
        assert_eq!(watchdog.last_contact_ms, SILENCE_TIMEOUT_MS + 1);
    }

    #[test]
    fn test_rearms_after_trip() {
        let mut watchdog = SilenceWatchdog::new(SILENCE_TIMEOUT_MS, 0);
        assert!(watchdog.check(3001));

        // Not again until another full period of silence
        assert!(!watchdog.check(3002));
        assert!(!watchdog.check(6001));
        assert!(watchdog.check(6002));
    }

    #[test]
    fn test_feed_resets_timer() {
        let mut watchdog = SilenceWatchdog::new(SILENCE_TIMEOUT_MS, 0);
        watchdog.feed(2500);
        assert!(!watchdog.check(5000));
        assert!(watchdog.check(5501));
    }

    #[test]
    fn test_timer_wraparound() {
        let start = u32::MAX - 1000;
        let mut watchdog = SilenceWatchdog::new(SILENCE_TIMEOUT_MS, start);
        assert!(!watchdog.check(start.wrapping_add(2000)));
        assert!(watchdog.check(start.wrapping_add(3001)));
    }
}
