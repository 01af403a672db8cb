//! Inter-task communication channels
//!
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use gemred_protocol::AngleReading;

/// Latest gauge reading (updated by the gauge task on every change)
pub static GAUGE_READING: Signal<CriticalSectionRawMutex, AngleReading> = Signal::new();
