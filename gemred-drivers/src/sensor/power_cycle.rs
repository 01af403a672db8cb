//! Deferred power cycle
//!
//! When the gauge announces it is shutting down, its power is cut and later
//! restored to force a restart. In deferred mode the off period is tracked
//! here and completed by a later poll instead of sleeping.

use gemred_hal::time::elapsed_ms;

/// Default time the gauge is held unpowered during a restart
pub const POWER_OFF_MS: u32 = 1000;

/// Pending power restoration
#[derive(Debug, Clone)]
pub struct PowerCycle {
    /// How long power stays off
    off_ms: u32,
    /// When power was cut, if a restart is in progress
    off_since_ms: Option<u32>,
}

impl PowerCycle {
    /// Create an idle power cycle holding power off for `off_ms`
    pub fn new(off_ms: u32) -> Self {
        Self {
            off_ms,
            off_since_ms: None,
        }
    }

    /// Note that power was cut at `now_ms`
    pub fn start(&mut self, now_ms: u32) {
        self.off_since_ms = Some(now_ms);
    }

    /// Check if power should be restored
    ///
    /// Returns true exactly once per restart, at the first call where the
    /// off period has fully elapsed.
    pub fn is_due(&mut self, now_ms: u32) -> bool {
        match self.off_since_ms {
            Some(since) if elapsed_ms(now_ms, since) >= self.off_ms => {
                self.off_since_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Check if a restart is in progress
    pub fn is_pending(&self) -> bool {
        self.off_since_ms.is_some()
    }
}
