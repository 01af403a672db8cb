//! GemRed Hardware Abstraction Layer
//!
//! This crate defines the three seams between the angle gauge driver and the
//! board it runs on. Everything is expressed on top of the `embedded-hal` and
//! `embedded-io` traits, so any HAL that implements those (embassy-rp,
//! linux-embedded-hal, test mocks) plugs straight in.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (gemred-firmware, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  gemred-drivers (AngleReader)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  gemred-hal (this crate - seams)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-io   │       │ embedded-hal  │
//! │ Read+ReadReady│       │ OutputPin     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits and types
//!
//! - [`serial::ByteSource`] - Non-blocking byte stream from the gauge
//! - [`gpio::PowerSwitch`] - Gauge power line with configurable polarity
//! - [`time::Clock`] - Millisecond uptime clock

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod serial;
pub mod time;

// Re-export key types at crate root for convenience
pub use gpio::PowerSwitch;
pub use serial::ByteSource;
pub use time::Clock;
