//! GemRed angle gauge sensor
//!
//! The reader is polled from the host loop; the watchdog and power cycle
//! are the pieces of state it carries between polls.

pub mod angle_gauge;
pub mod power_cycle;
pub mod watchdog;

pub use angle_gauge::{AngleReader, AngleReaderConfig, PowerCycleMode};
pub use power_cycle::PowerCycle;
pub use watchdog::SilenceWatchdog;
