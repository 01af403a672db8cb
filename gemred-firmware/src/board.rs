//! Board wiring and gauge settings
//!
//! The gauge runs at 9600 baud and is fed through an NPN follower from the
//! power pin, so it is powered while the pin is HIGH.

use embassy_rp::gpio::Level;
use embassy_time::Instant;

use gemred_drivers::{AngleReaderConfig, PowerCycleMode};
use gemred_hal::Clock;

/// Baud rate of the gauge's TX pad
pub const GAUGE_BAUDRATE: u32 = 9600;

/// Gauge reader settings for this board
///
/// The restart is deferred so a stop message never stalls the executor.
pub fn gauge_config() -> AngleReaderConfig {
    AngleReaderConfig {
        power_on_high: true,
        power_cycle: PowerCycleMode::Deferred,
        ..Default::default()
    }
}

/// Pin level that keeps the gauge unpowered
pub fn power_off_level(config: &AngleReaderConfig) -> Level {
    if config.power_on_high {
        Level::Low
    } else {
        Level::High
    }
}

/// Uptime clock backed by the embassy time driver
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u32 {
        // Truncation wraps every ~49 days; the reader handles the wrap
        Instant::now().as_millis() as u32
    }
}
